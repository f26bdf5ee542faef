//! Plain-text rendering of a comparison run for the `check` command.
//!
//! A `*` after a value marks a field that disagrees with the majority.

use ferrous_dnscheck_domain::{AnnotatedOutcome, QueryRun, RecordField, RunStatus};
use std::fmt::Write;

const MISMATCH_MARK: &str = " *";

pub fn render(run: &QueryRun) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}: {} of {} resolvers answered",
        run.domain,
        run.outcomes.len(),
        run.resolver_count
    );

    if run.status() == RunStatus::NoServersConfigured {
        out.push_str("No resolvers configured.\n");
        return out;
    }

    for annotated in &run.outcomes {
        render_outcome(&mut out, annotated);
    }

    let dissenters = run.dissenters().count();
    if !run.outcomes.is_empty() {
        let _ = writeln!(
            out,
            "\n{} resolver(s) disagree with the majority (marked *)",
            dissenters
        );
    }

    if !run.errors.is_empty() {
        out.push_str("\nErrors:\n");
        for err in &run.errors {
            let _ = writeln!(out, "  {}", err);
        }
    }

    out
}

fn render_outcome(out: &mut String, annotated: &AnnotatedOutcome) {
    let outcome = &annotated.outcome;
    let _ = writeln!(
        out,
        "\n{} ({})  {:?}",
        outcome.operator, outcome.address, outcome.elapsed
    );

    line(out, "A", &outcome.addresses.join(", "), annotated.matches(RecordField::Addresses));
    line(out, "CNAME", &outcome.cname, annotated.matches(RecordField::Cname));
    line(out, "TXT", &outcome.txts.join(" | "), annotated.matches(RecordField::Txts));
    line(out, "NS", &outcome.ns.join(", "), annotated.matches(RecordField::Ns));
}

fn line(out: &mut String, label: &str, value: &str, matches: bool) {
    let value = if value.is_empty() { "-" } else { value };
    let mark = if matches { "" } else { MISMATCH_MARK };
    let _ = writeln!(out, "  {:<6}{}{}", label, value, mark);
}
