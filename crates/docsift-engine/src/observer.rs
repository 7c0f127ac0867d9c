//! # Parse Observation
//!
//! Parser stages never log directly. They report what they decide to a
//! [`ParseObserver`] handed in by the caller; the default is [`NullObserver`].
//! [`LogObserver`] forwards everything to the `log` facade under the target
//! `docsift::<section>` so a binary can switch sections on and off with
//! `RUST_LOG=docsift::risks=trace`.

use log::{Level, debug, log_enabled, trace};

use crate::{
    locate::HeaderMatch,
    markup::BlockId,
    orchestrator::ParseState,
    result::Mode,
    scan::{Candidate, Rejection},
    table::TableVerdict,
};

/// Receives parse events. Every method defaults to doing nothing.
pub trait ParseObserver: Send + Sync {
    fn state_changed(&self, _section: &str, _from: ParseState, _to: ParseState) {}

    fn header_located(&self, _section: &str, _header: &HeaderMatch, _text: &str) {}

    fn candidate_scored(&self, _section: &str, _candidate: &Candidate) {}

    fn candidate_rejected(&self, _section: &str, _block: BlockId, _reason: &Rejection) {}

    fn table_classified(&self, _section: &str, _table: BlockId, _mode: Mode, _verdict: &TableVerdict) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ParseObserver for NullObserver {}

/// Forwards parse events to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

fn target(section: &str) -> String {
    format!("docsift::{section}")
}

impl ParseObserver for LogObserver {
    fn state_changed(&self, section: &str, from: ParseState, to: ParseState) {
        let target = target(section);
        debug!(target: target.as_str(), "{from:?} -> {to:?}");
    }

    fn header_located(&self, section: &str, header: &HeaderMatch, text: &str) {
        let target = target(section);
        debug!(
            target: target.as_str(),
            "header at block {} ({:?} pass) matched {:?}: {text:?}",
            header.block.index(),
            header.pass,
            header.synonym
        );
    }

    fn candidate_scored(&self, section: &str, candidate: &Candidate) {
        let target = target(section);
        trace!(
            target: target.as_str(),
            "candidate block {} scored {}",
            candidate.block.index(),
            candidate.score
        );
    }

    fn candidate_rejected(&self, section: &str, block: BlockId, reason: &Rejection) {
        let target = target(section);
        // Rejections are the bulk of scan output.
        if log_enabled!(target: target.as_str(), Level::Trace) {
            trace!(target: target.as_str(), "block {} rejected: {reason:?}", block.index());
        }
    }

    fn table_classified(&self, section: &str, table: BlockId, mode: Mode, verdict: &TableVerdict) {
        let target = target(section);
        debug!(
            target: target.as_str(),
            "table {} ({mode:?}): {verdict:?}",
            table.index()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl ParseObserver for Recorder {
        fn state_changed(&self, section: &str, _from: ParseState, to: ParseState) {
            if let Ok(mut events) = self.0.lock() {
                events.push(format!("{section}:{to:?}"));
            }
        }
    }

    #[test]
    fn unimplemented_events_default_to_no_op() {
        let recorder = Recorder::default();
        let observer: &dyn ParseObserver = &recorder;
        observer.candidate_rejected("risks", BlockId(0), &Rejection::NoLetters);
        observer.state_changed("risks", ParseState::Idle, ParseState::Parsing);
        assert_eq!(*recorder.0.lock().unwrap(), ["risks:Parsing"]);
    }

    #[test]
    fn log_observer_accepts_every_event() {
        let observer = LogObserver;
        observer.state_changed("risks", ParseState::Parsing, ParseState::NotFound);
        observer.candidate_rejected("risks", BlockId(3), &Rejection::InsideTable);
        observer.table_classified("glossary", BlockId(1), Mode::Strict, &TableVerdict::NoHeaderRow);
    }
}
