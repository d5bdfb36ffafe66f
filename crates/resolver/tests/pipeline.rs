//! Parsing and resolving lines end to end against the JSON catalog fixture.

use fastmap_catalog::Catalog;
use fastmap_notation::SyntaxErrorKind;
use fastmap_primitives::{ConnectionType, ScopeClass, ScopeId, TypeCode};
use fastmap_resolver::{
	ErrorKind, FarType, Fastmap, LineOutcome, OriginScope, PairLink, ResolveError, SignatureId, SignatureKind,
	SignatureRecord, Snapshot, UpsertAction,
};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("../../catalog/tests/fixtures/wormholes.json");
const HOME: ScopeId = ScopeId(31_002_238);
const SYSTEM: &str = "J123456";

fn code(s: &str) -> TypeCode {
	TypeCode::new(s).unwrap()
}

fn catalog() -> Catalog {
	let _ = tracing_subscriber::fmt::try_init();
	Catalog::from_json(FIXTURE).unwrap()
}

fn origin() -> OriginScope {
	OriginScope::new(HOME, ScopeClass::C5)
}

fn signatures() -> Vec<SignatureRecord> {
	vec![
		SignatureRecord::new(1, "ABC-123", Some(HOME), SignatureKind::Unknown),
		SignatureRecord::new(2, "DEF-456", Some(HOME), SignatureKind::Unknown),
		SignatureRecord::new(3, "GHI-789", Some(HOME), SignatureKind::Wormhole),
		SignatureRecord::new(4, "JKL-012", None, SignatureKind::Wormhole),
	]
}

fn links() -> Vec<PairLink> {
	vec![PairLink::new(
		40,
		SignatureId(3),
		SignatureId(4),
		ConnectionType::Unknown,
	)]
}

#[test]
fn concrete_type_resolves_from_catalog() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let signatures = signatures();
	let snapshot = Snapshot::new(&signatures, &[]);

	let parsed = fastmap.parse("H5A ABC H296").unwrap();
	assert_eq!(parsed.chain, 'H');
	assert_eq!(parsed.depth.as_str(), "A");
	assert_eq!(parsed.signature.as_str(), "ABC");

	let upsert = fastmap.resolve(&parsed, origin(), &snapshot).unwrap();
	assert_eq!(upsert.destination, ScopeClass::C5);
	assert_eq!(upsert.far_type, FarType::Reverse);
	assert_eq!(upsert.origin.lifetime.max_hours, 16);
	assert_eq!(upsert.origin.code.as_deref(), Some("ABC-123"));
}

#[test]
fn lone_eligible_type_wins_regardless_of_size() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let signatures = signatures();
	let snapshot = Snapshot::new(&signatures, &[]);

	for line in ["H5A ABC K162", "H5A ABC K162 F"] {
		let parsed = fastmap.parse(line).unwrap();
		let upsert = fastmap.resolve(&parsed, origin(), &snapshot).unwrap();
		assert_eq!(upsert.far_type, FarType::Code(code("H296")), "{line}");
	}
}

#[test]
fn truncated_line_is_missing_its_signature() {
	let catalog = catalog();
	let err = Fastmap::new(&catalog).parse("H5").unwrap_err();
	assert_eq!(err.kind, SyntaxErrorKind::MissingSignature);
	assert_eq!(err.position, 2);
}

#[test]
fn modifier_block_may_precede_type() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	assert_eq!(
		fastmap.parse("N3B XYZ EC H296").unwrap(),
		fastmap.parse("N3B XYZ H296 EC").unwrap()
	);
}

#[test]
fn batch_isolates_failures() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let signatures = signatures();
	let snapshot = Snapshot::new(&signatures, &[]);

	let parsed: Vec<_> = ["H5A ABC H296", "H5B ZZZ H296", "H5C DEF K162"]
		.into_iter()
		.map(|line| fastmap.parse(line).unwrap())
		.collect();
	let results = fastmap.resolve_all(&parsed, origin(), &snapshot);

	assert_eq!(results.len(), 3);
	assert_eq!(results[0].as_ref().unwrap().origin.id, Some(SignatureId(1)));
	assert_eq!(
		results[1].as_ref().unwrap_err().kind(),
		ErrorKind::NoMatchingSignature
	);
	assert_eq!(results[2].as_ref().unwrap().origin.id, Some(SignatureId(2)));
}

#[test]
fn process_lines_reports_each_line() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let signatures = signatures();
	let links = links();
	let snapshot = Snapshot::new(&signatures, &links);

	let outcomes = fastmap.process_lines(
		["H5A ABC H296", "H5", "H5C DEF Q999", "H5D GHI H296 E"],
		origin(),
		&snapshot,
	);

	assert_eq!(outcomes.len(), 4);
	assert!(outcomes[0].is_resolved());
	assert!(matches!(&outcomes[1], LineOutcome::Syntax(err) if err.kind == SyntaxErrorKind::MissingSignature));
	assert_eq!(
		outcomes[2],
		LineOutcome::Rejected(ResolveError::UnknownConnectionType(code("Q999")))
	);
	let LineOutcome::Resolved(update) = &outcomes[3] else {
		panic!("expected an update, got {:?}", outcomes[3]);
	};
	assert_eq!(update.action, UpsertAction::Update);
	assert_eq!(update.far.id, Some(SignatureId(4)));
	assert_eq!(update.origin.lifetime.remaining_hours, 1);
}

#[test]
fn bookmark_paste_resolves_local_coordinates() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let signatures = signatures();
	let snapshot = Snapshot::new(&signatures, &[]);

	let paste = [
		format!("#H5A ABC H296\tCoordinate\t1 AU\t{SYSTEM}\tSystem"),
		format!("#H5B DEF\tCoordinate\t1 AU\t{SYSTEM}\tSystem"),
		format!("home\tCoordinate\t1 AU\t{SYSTEM}\tSystem"),
		format!("#H5C ZZZ H296\tCoordinate\t1 AU\t{SYSTEM}\tSystem"),
		"#H3A GHI K162\tCoordinate\t1 AU\tJ999999\tSystem".to_string(),
	]
	.join("\n");

	let report = fastmap
		.process_paste(&paste, SYSTEM, origin(), &snapshot)
		.unwrap();
	assert_eq!(report.parsed.len(), 2);
	assert_eq!(report.results.len(), 2);
	assert!(report.results[0].is_ok());
	assert_eq!(
		report.results[1].as_ref().unwrap_err().kind(),
		ErrorKind::NoMatchingSignature
	);
	assert_eq!(report.rejected.len(), 1);
	assert_eq!(report.rejected[0].0, "#H5B DEF");
	assert_eq!(report.skipped, 1);

	let summary = report.summary();
	assert_eq!(summary.resolved, 1);
	assert_eq!(summary.failed, 2);
}

#[test]
fn foreign_paste_is_left_alone() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let snapshot = Snapshot::default();

	let paste = "ABC-123\tCosmic Signature\tWormhole\t\t100.0%\t4.21 AU";
	assert_eq!(fastmap.process_paste(paste, SYSTEM, origin(), &snapshot), None);
}

#[test]
fn upserts_serialize_for_persistence() {
	let catalog = catalog();
	let fastmap = Fastmap::new(&catalog);
	let signatures = signatures();
	let snapshot = Snapshot::new(&signatures, &[]);

	let parsed = fastmap.parse("H?A ABC K162").unwrap();
	let upsert = fastmap.resolve(&parsed, origin(), &snapshot).unwrap();
	let json = serde_json::to_value(&upsert).unwrap();

	assert_eq!(json["action"], "create");
	assert_eq!(json["link"]["type"], "????");
	assert_eq!(json["link"]["typed_side"], "secondary");
	assert_eq!(json["origin"]["id"], 1);
	assert_eq!(json["origin"]["scope"], HOME.0);
	assert_eq!(json["far"]["id"], serde_json::Value::Null);
	assert_eq!(json["destination"], "Unknown");
	assert_eq!(json["far_type"], "unknown");
}

#[test]
fn snapshots_deserialize_from_json() {
	let signatures: Vec<SignatureRecord> = serde_json::from_str(
		r#"[
			{ "id": 3, "code": "GHI-789", "scope": 31002238, "kind": "wormhole", "name": "H5A GHI" },
			{ "id": 4, "code": "JKL-012" }
		]"#,
	)
	.unwrap();
	let links: Vec<PairLink> =
		serde_json::from_str(r#"[{ "id": 40, "initial": 3, "secondary": 4, "type": "H296", "mass": "destab" }]"#)
			.unwrap();

	assert_eq!(signatures[0].kind, SignatureKind::Wormhole);
	assert_eq!(signatures[1].kind, SignatureKind::Unknown);
	assert_eq!(signatures[1].scope, None);
	assert_eq!(
		links[0].connection_type,
		ConnectionType::Code(code("H296"))
	);

	let snapshot = Snapshot::new(&signatures, &links);
	let (link, _) = snapshot.link_for(SignatureId(4)).unwrap();
	assert_eq!(link.id.0, 40);
}
