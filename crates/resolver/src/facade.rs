//! One handle for parsing and resolving.

use fastmap_catalog::Catalog;
use fastmap_notation::bookmarks::{self, Paste};
use fastmap_notation::{ParsedConnection, SyntaxError, parse};

use crate::batch::BatchSummary;
use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::resolve::Resolver;
use crate::snapshot::{OriginScope, Snapshot};
use crate::upsert::ResolvedUpsert;

/// What became of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
	Resolved(ResolvedUpsert),
	/// The line did not parse.
	Syntax(SyntaxError),
	/// The line parsed but could not be resolved.
	Rejected(ResolveError),
}

impl LineOutcome {
	pub fn is_resolved(&self) -> bool {
		matches!(self, Self::Resolved(_))
	}
}

/// Outcome of a bookmark paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteReport {
	/// Lines that parsed, in paste order.
	pub parsed: Vec<ParsedConnection>,
	/// One result per entry of [`parsed`](Self::parsed).
	pub results: Vec<Result<ResolvedUpsert>>,
	/// Lines meant as shorthand that did not parse.
	pub rejected: Vec<(String, SyntaxError)>,
	/// Other bookmarks that did not parse.
	pub skipped: usize,
}

impl PasteReport {
	/// Resolved lines against rejected and unresolvable ones.
	pub fn summary(&self) -> BatchSummary {
		let resolved = self.results.iter().map(|result| result.is_ok());
		let rejected = self.rejected.iter().map(|_| false);
		BatchSummary::tally(resolved.chain(rejected))
	}
}

/// Parser and resolver sharing one catalog and configuration.
///
/// # Example
///
/// ```ignore
/// let fastmap = Fastmap::new(&catalog);
/// let parsed = fastmap.parse("H5A ABC H296")?;
/// let upsert = fastmap.resolve(&parsed, origin, &snapshot)?;
/// ```
#[derive(Debug, Clone)]
pub struct Fastmap<'a> {
	resolver: Resolver<'a>,
}

impl<'a> Fastmap<'a> {
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			resolver: Resolver::new(catalog),
		}
	}

	pub fn with_config(mut self, config: &ResolverConfig) -> Self {
		self.resolver = self.resolver.with_config(config);
		self
	}

	pub fn resolver(&self) -> &Resolver<'a> {
		&self.resolver
	}

	/// Parses one line. Type codes are checked against the catalog only when
	/// the line is resolved.
	pub fn parse(&self, text: &str) -> std::result::Result<ParsedConnection, SyntaxError> {
		parse(text)
	}

	pub fn resolve(
		&self,
		parsed: &ParsedConnection,
		origin: OriginScope,
		snapshot: &Snapshot<'_>,
	) -> Result<ResolvedUpsert> {
		self.resolver.resolve(parsed, origin, snapshot)
	}

	pub fn resolve_all(
		&self,
		parsed: &[ParsedConnection],
		origin: OriginScope,
		snapshot: &Snapshot<'_>,
	) -> Vec<Result<ResolvedUpsert>> {
		self.resolver.resolve_all(parsed, origin, snapshot)
	}

	/// Parses and resolves each line, one outcome per line in input order.
	pub fn process_lines<I, S>(&self, lines: I, origin: OriginScope, snapshot: &Snapshot<'_>) -> Vec<LineOutcome>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		lines
			.into_iter()
			.map(|line| match parse(line.as_ref()) {
				Err(error) => LineOutcome::Syntax(error),
				Ok(parsed) => match self.resolver.resolve(&parsed, origin, snapshot) {
					Ok(upsert) => LineOutcome::Resolved(upsert),
					Err(error) => LineOutcome::Rejected(error),
				},
			})
			.collect()
	}

	/// Handles a clipboard paste made while viewing `system`.
	///
	/// Returns `None` when the paste is not shorthand or bookmarks, so the
	/// caller can hand it to whatever else processes pastes.
	pub fn process_paste(
		&self,
		clipboard: &str,
		system: &str,
		origin: OriginScope,
		snapshot: &Snapshot<'_>,
	) -> Option<PasteReport> {
		let Paste::Lines(candidates) = bookmarks::extract(clipboard, system) else {
			return None;
		};
		let report = bookmarks::parse_candidates(&candidates);
		let results = self.resolver.resolve_all(&report.parsed, origin, snapshot);
		Some(PasteReport {
			parsed: report.parsed,
			results,
			rejected: report.rejected,
			skipped: report.skipped,
		})
	}
}
