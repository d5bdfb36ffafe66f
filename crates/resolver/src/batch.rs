//! Resolving many lines against one snapshot.

use fastmap_notation::ParsedConnection;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::resolve::Resolver;
use crate::snapshot::{OriginScope, Snapshot};
use crate::upsert::ResolvedUpsert;

/// Success and failure counts of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchSummary {
	pub resolved: usize,
	pub failed: usize,
}

impl BatchSummary {
	/// Counts `true` as resolved and `false` as failed.
	pub fn tally(outcomes: impl IntoIterator<Item = bool>) -> Self {
		outcomes.into_iter().fold(Self::default(), |mut summary, ok| {
			if ok {
				summary.resolved += 1;
			} else {
				summary.failed += 1;
			}
			summary
		})
	}

	pub fn total(&self) -> usize {
		self.resolved + self.failed
	}
}

impl Resolver<'_> {
	/// Resolves each entry independently.
	///
	/// The result has one slot per input entry, in input order; a failed
	/// entry never affects the others.
	pub fn resolve_all(
		&self,
		parsed: &[ParsedConnection],
		origin: OriginScope,
		snapshot: &Snapshot<'_>,
	) -> Vec<Result<ResolvedUpsert>> {
		let results: Vec<_> = parsed
			.iter()
			.map(|entry| self.resolve(entry, origin, snapshot))
			.collect();
		let summary = BatchSummary::tally(results.iter().map(|result| result.is_ok()));
		debug!(
			resolved = summary.resolved,
			failed = summary.failed,
			scope = %origin.id,
			"resolved batch"
		);
		results
	}
}
