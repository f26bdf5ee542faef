//! HTML fragment for the htmx front end.
//!
//! Cells whose field disagrees with the majority carry `class="mismatch"`.

use ferrous_dnscheck_domain::{AnnotatedOutcome, QueryRun, RecordField};
use std::fmt::Write;

const HEADER: &str = "<thead><tr><th>Operator</th><th>Server</th><th>A</th><th>TXT</th><th>NS</th><th>CNAME</th><th>Request Duration</th></tr></thead>";

pub fn render_table(run: &QueryRun) -> String {
    let mut html = String::with_capacity(256 + run.outcomes.len() * 256);

    html.push_str("<table>\n");
    html.push_str(HEADER);
    html.push_str("\n<tbody>\n");

    for annotated in &run.outcomes {
        render_row(&mut html, annotated);
    }

    html.push_str("</tbody>\n</table>");

    if !run.errors.is_empty() {
        html.push_str("\n<ul class=\"errors\">\n");
        for err in &run.errors {
            let _ = writeln!(
                html,
                "<li>{} ({}): {}</li>",
                escape(&err.operator),
                escape(&err.address),
                escape(&err.error.to_string())
            );
        }
        html.push_str("</ul>");
    }

    html
}

fn render_row(html: &mut String, annotated: &AnnotatedOutcome) {
    let outcome = &annotated.outcome;

    html.push_str("<tr>\n");
    let _ = writeln!(html, "<td>{}</td>", escape(&outcome.operator));
    let _ = writeln!(html, "<td>{}</td>", escape(&outcome.address));
    push_cell(html, annotated, RecordField::Addresses, &join(&outcome.addresses));
    push_cell(html, annotated, RecordField::Txts, &join(&outcome.txts));
    push_cell(html, annotated, RecordField::Ns, &join(&outcome.ns));
    push_cell(html, annotated, RecordField::Cname, &escape(&outcome.cname));
    let _ = writeln!(html, "<td>{:?}</td>", outcome.elapsed);
    html.push_str("</tr>\n");
}

fn push_cell(html: &mut String, annotated: &AnnotatedOutcome, field: RecordField, body: &str) {
    let class = if annotated.matches(field) { "" } else { "mismatch" };
    let _ = writeln!(html, "<td class=\"{}\">{}</td>", class, body);
}

fn join(values: &[String]) -> String {
    values
        .iter()
        .map(|v| escape(v))
        .collect::<Vec<_>>()
        .join("<br />")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_dnscheck_domain::{
        DomainError, LookupOutcome, ResolverEndpoint, ResolverError,
    };
    use std::time::Duration;

    fn annotated(operator: &str, addrs: &[&str], addresses_match: bool) -> AnnotatedOutcome {
        AnnotatedOutcome {
            outcome: LookupOutcome::new(&ResolverEndpoint::new(operator, "192.0.2.1:53"))
                .with_addresses(addrs.iter().map(|s| s.to_string()).collect())
                .with_elapsed(Duration::from_millis(12)),
            addresses_match_majority: addresses_match,
            cname_match_majority: true,
            txts_match_majority: true,
            ns_match_majority: true,
        }
    }

    #[test]
    fn test_mismatch_class_only_on_dissenting_cell() {
        let mut run = QueryRun::empty("example.com");
        run.outcomes.push(annotated("Honest", &["93.184.216.34"], true));
        run.outcomes.push(annotated("Hijacked", &["203.0.113.66"], false));

        let html = render_table(&run);

        assert_eq!(html.matches("class=\"mismatch\"").count(), 1);
        let hijacked_row = html.split("<tr>").find(|r| r.contains("Hijacked")).unwrap();
        assert!(hijacked_row.contains("<td class=\"mismatch\">203.0.113.66</td>"));
    }

    #[test]
    fn test_multiple_values_joined_with_breaks() {
        let mut run = QueryRun::empty("example.com");
        run.outcomes
            .push(annotated("Dual", &["192.0.2.1", "2001:db8::1"], true));

        let html = render_table(&run);

        assert!(html.contains("192.0.2.1<br />2001:db8::1"));
        assert!(html.contains("<td>12ms</td>"));
    }

    #[test]
    fn test_record_data_is_escaped() {
        let mut run = QueryRun::empty("example.com");
        let mut row = annotated("<script>", &[], true);
        row.outcome.txts = vec!["a<b>&\"c\"".to_string()];
        run.outcomes.push(row);

        let html = render_table(&run);

        assert!(!html.contains("<script>"));
        assert!(html.contains("a&lt;b&gt;&amp;&quot;c&quot;"));
    }

    #[test]
    fn test_errors_listed_after_table() {
        let mut run = QueryRun::empty("example.com");
        run.errors.push(ResolverError::new(
            &ResolverEndpoint::new("Broken", "dns.example:53"),
            DomainError::InvalidAddress("dns.example:53".into()),
        ));

        let html = render_table(&run);

        assert!(html.contains("<ul class=\"errors\">"));
        assert!(html.contains("<li>Broken (dns.example:53): Invalid resolver address: dns.example:53</li>"));
    }

    #[test]
    fn test_empty_run_renders_header_only() {
        let html = render_table(&QueryRun::empty("example.com"));
        assert!(html.contains("<th>Request Duration</th>"));
        assert!(!html.contains("<tr>\n"));
        assert!(!html.contains("errors"));
    }
}
