//! Console rendering of user records.

use crate::export::{csv_quote, SummaryRow};
use crate::filter::filter_by_city_prefix;
use crate::format::OutputFormat;
use crate::stats::Statistics;
use serde::Serialize;
use std::io::{self, Write};
use userfetch_client::UserRecord;

const BANNER_WIDTH: usize = 60;
const PRETTY_SEPARATOR_WIDTH: usize = 50;
const MINIMAL_SEPARATOR_WIDTH: usize = 24;

pub const NO_USERS: &str = "No users found.";
pub const NO_MATCHES: &str = "No users found matching the criteria.";

/// One JSON document holding every listing of a run.
#[derive(Serialize)]
struct Report<'a> {
    all: Vec<SummaryRow<'a>>,
    prefix: &'a str,
    filtered: Vec<SummaryRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<&'a Statistics>,
}

/// Writes records to a sink in the configured format.
///
/// # Example
///
/// ```ignore
/// use userfetch_display::{OutputFormat, Presenter};
///
/// let mut presenter = Presenter::new(std::io::stdout(), OutputFormat::Minimal);
/// presenter.display_all(&users)?;
/// presenter.display_filtered(&users, "S")?;
/// ```
pub struct Presenter<W: Write> {
    out: W,
    format: OutputFormat,
    limit: Option<usize>,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            limit: None,
        }
    }

    /// Render at most `limit` records per listing.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render every record in input order.
    pub fn display_all(&mut self, records: &[UserRecord]) -> io::Result<()> {
        self.section("ALL USERS")?;

        if records.is_empty() {
            return writeln!(self.out, "{}", NO_USERS);
        }

        let all: Vec<&UserRecord> = records.iter().collect();
        self.render(&all)
    }

    /// Render the records whose city starts with `prefix`, ignoring case.
    pub fn display_filtered(&mut self, records: &[UserRecord], prefix: &str) -> io::Result<()> {
        self.section(&format!("USERS FROM CITIES STARTING WITH '{}'", prefix))?;

        let matches = filter_by_city_prefix(records, prefix);
        if matches.is_empty() {
            return writeln!(self.out, "{}", NO_MATCHES);
        }

        self.render(&matches)
    }

    /// Render both listings and, if given, the statistics.
    ///
    /// Text formats print the sections one after another. JSON writes a
    /// single object with `all`, `prefix`, `filtered` and `statistics` keys.
    /// CSV writes one table with a leading `Section` column; statistics have
    /// no place in it and are left to the caller.
    pub fn display_report(
        &mut self,
        records: &[UserRecord],
        prefix: &str,
        stats: Option<&Statistics>,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Pretty | OutputFormat::Minimal => {
                self.display_all(records)?;
                self.display_filtered(records, prefix)?;
                match stats {
                    Some(stats) => self.display_statistics(stats),
                    None => Ok(()),
                }
            }
            OutputFormat::Json => {
                let all: Vec<&UserRecord> = records.iter().collect();
                let matches = filter_by_city_prefix(records, prefix);
                let report = Report {
                    all: self
                        .limited(&all)
                        .iter()
                        .map(|u| SummaryRow::from(*u))
                        .collect(),
                    prefix,
                    filtered: self
                        .limited(&matches)
                        .iter()
                        .map(|u| SummaryRow::from(*u))
                        .collect(),
                    statistics: stats,
                };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)
            }
            OutputFormat::Csv => {
                let all: Vec<&UserRecord> = records.iter().collect();
                let matches = filter_by_city_prefix(records, prefix);
                writeln!(self.out, "Section,Name,Username,Email,City")?;
                self.csv_rows("all", &all)?;
                self.csv_rows("filtered", &matches)
            }
        }
    }

    /// Render the statistics report.
    pub fn display_statistics(&mut self, stats: &Statistics) -> io::Result<()> {
        if stats.total == 0 {
            return writeln!(self.out, "No user data available.");
        }

        writeln!(self.out)?;
        writeln!(self.out, "Statistics:")?;
        writeln!(self.out, "   Total Users: {}", stats.total)?;
        writeln!(self.out, "   Unique Cities: {}", stats.unique_cities)?;
        writeln!(
            self.out,
            "   Cities starting with '{}': {}",
            stats.prefix, stats.cities_with_prefix
        )?;
        if let Some((city, count)) = &stats.most_common_city {
            writeln!(self.out, "   Most common city: {} ({} users)", city, count)?;
        }
        Ok(())
    }

    /// Full-width banner line with a title, used around sections.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        if !self.format.is_text() {
            return Ok(());
        }
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule)
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        if !self.format.is_text() {
            return Ok(());
        }
        writeln!(self.out)?;
        self.banner(title)?;
        writeln!(self.out)
    }

    fn limited<'r, 'u>(&self, records: &'r [&'u UserRecord]) -> &'r [&'u UserRecord] {
        match self.limit {
            Some(limit) => &records[..limit.min(records.len())],
            None => records,
        }
    }

    fn csv_rows(&mut self, section: &str, records: &[&UserRecord]) -> io::Result<()> {
        for user in self.limited(records) {
            writeln!(
                self.out,
                "{},{},{},{},{}",
                section,
                csv_quote(user.name()),
                csv_quote(user.username()),
                csv_quote(user.email()),
                csv_quote(user.city())
            )?;
        }
        Ok(())
    }

    fn render(&mut self, records: &[&UserRecord]) -> io::Result<()> {
        let shown = self.limited(records);

        match self.format {
            OutputFormat::Pretty => self.render_pretty(shown),
            OutputFormat::Minimal => self.render_minimal(shown),
            OutputFormat::Json => self.render_json(shown),
            OutputFormat::Csv => self.render_csv(shown),
        }
    }

    fn render_pretty(&mut self, records: &[&UserRecord]) -> io::Result<()> {
        let separator = "─".repeat(PRETTY_SEPARATOR_WIDTH);
        for (idx, user) in records.iter().enumerate() {
            writeln!(self.out, "User {}:", idx + 1)?;
            writeln!(self.out, "   Name:     {}", user.name())?;
            writeln!(self.out, "   Username: {}", user.username())?;
            writeln!(self.out, "   Email:    {}", user.email())?;
            writeln!(self.out, "   City:     {}", user.city())?;
            writeln!(self.out, "   Phone:    {}", user.phone())?;
            writeln!(self.out, "   Company:  {}", user.company())?;
            writeln!(self.out, "{}", separator)?;
        }
        Ok(())
    }

    fn render_minimal(&mut self, records: &[&UserRecord]) -> io::Result<()> {
        let separator = "-".repeat(MINIMAL_SEPARATOR_WIDTH);
        for (idx, user) in records.iter().enumerate() {
            writeln!(self.out, "User {}:", idx + 1)?;
            writeln!(self.out, "Name: {}", user.name())?;
            writeln!(self.out, "Username: {}", user.username())?;
            writeln!(self.out, "Email: {}", user.email())?;
            writeln!(self.out, "City: {}", user.city())?;
            writeln!(self.out, "{}", separator)?;
        }
        Ok(())
    }

    fn render_json(&mut self, records: &[&UserRecord]) -> io::Result<()> {
        let rows: Vec<SummaryRow<'_>> = records
            .iter()
            .map(|user| SummaryRow::from(*user))
            .collect();
        serde_json::to_writer_pretty(&mut self.out, &rows)?;
        writeln!(self.out)
    }

    fn render_csv(&mut self, records: &[&UserRecord]) -> io::Result<()> {
        writeln!(self.out, "Name,Username,Email,City")?;
        for user in records {
            writeln!(
                self.out,
                "{},{},{},{}",
                csv_quote(user.name()),
                csv_quote(user.username()),
                csv_quote(user.email()),
                csv_quote(user.city())
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_users() -> Vec<UserRecord> {
        serde_json::from_str(
            r#"[{"name":"A","username":"a","email":"a@x.com","address":{"city":"Springfield"}},
                {"name":"B","username":"b","email":"b@x.com","address":{"city":"Reno"}}]"#,
        )
        .unwrap()
    }

    fn render_with(
        format: OutputFormat,
        f: impl FnOnce(&mut Presenter<Vec<u8>>) -> io::Result<()>,
    ) -> String {
        let mut presenter = Presenter::new(Vec::new(), format);
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_display_all_in_order() {
        let users = two_users();
        let out = render_with(OutputFormat::Minimal, |p| p.display_all(&users));

        let a = out.find("Name: A").expect("A rendered");
        let b = out.find("Name: B").expect("B rendered");
        assert!(a < b);
        assert!(out.contains("User 1:"));
        assert!(out.contains("User 2:"));
        assert!(out.contains("City: Springfield"));
        assert!(out.contains("City: Reno"));
        assert!(out.contains(&"-".repeat(24)));
    }

    #[test]
    fn test_display_filtered_only_matches() {
        let users = two_users();
        let out = render_with(OutputFormat::Minimal, |p| p.display_filtered(&users, "S"));

        assert!(out.contains("STARTING WITH 'S'"));
        assert!(out.contains("Name: A"));
        assert!(out.contains("City: Springfield"));
        assert!(!out.contains("Name: B"));
        assert!(!out.contains("Reno"));
    }

    #[test]
    fn test_filtered_indices_restart_at_one() {
        let users: Vec<UserRecord> = serde_json::from_str(
            r#"[{"name":"B","address":{"city":"Reno"}},{"name":"A","address":{"city":"Springfield"}}]"#,
        )
        .unwrap();
        let out = render_with(OutputFormat::Minimal, |p| p.display_filtered(&users, "s"));

        assert!(out.contains("User 1:\nName: A"));
        assert!(!out.contains("User 2:"));
    }

    #[test]
    fn test_missing_address_renders_placeholder() {
        let users: Vec<UserRecord> =
            serde_json::from_str(r#"[{"name":"A","username":"a","email":"a@x.com"}]"#).unwrap();
        let out = render_with(OutputFormat::Pretty, |p| p.display_all(&users));

        assert!(out.contains("City:     N/A"));
        assert!(out.contains("Company:  N/A"));
    }

    #[test]
    fn test_empty_input_prints_notice() {
        let out = render_with(OutputFormat::Pretty, |p| p.display_all(&[]));
        assert!(out.contains(NO_USERS));
        assert!(!out.contains("User 1:"));
    }

    #[test]
    fn test_no_matches_prints_notice() {
        let users = two_users();
        let out = render_with(OutputFormat::Pretty, |p| p.display_filtered(&users, "X"));
        assert!(out.contains(NO_MATCHES));
    }

    #[test]
    fn test_limit_caps_listing() {
        let users = two_users();
        let mut presenter = Presenter::new(Vec::new(), OutputFormat::Minimal).with_limit(Some(1));
        presenter.display_all(&users).unwrap();
        let out = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(out.contains("Name: A"));
        assert!(!out.contains("Name: B"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let users = two_users();
        let out = render_with(OutputFormat::Json, |p| p.display_all(&users));

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["name"], "A");
        assert_eq!(parsed[0]["city"], "Springfield");
        assert_eq!(parsed[1]["city"], "Reno");
        assert!(!out.contains("ALL USERS"));
    }

    #[test]
    fn test_csv_output() {
        let users = two_users();
        let out = render_with(OutputFormat::Csv, |p| p.display_filtered(&users, "S"));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name,Username,Email,City");
        assert_eq!(lines[1], r#""A","a","a@x.com","Springfield""#);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_json_report_is_one_document() {
        let users = two_users();
        let stats = Statistics::collect(&users, "S");
        let out = render_with(OutputFormat::Json, |p| {
            p.display_report(&users, "S", Some(&stats))
        });

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["all"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["all"][1]["name"], "B");
        assert_eq!(parsed["prefix"], "S");
        assert_eq!(parsed["filtered"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["filtered"][0]["city"], "Springfield");
        assert_eq!(parsed["statistics"]["total"], 2);
    }

    #[test]
    fn test_json_report_without_stats_or_users() {
        let out = render_with(OutputFormat::Json, |p| p.display_report(&[], "S", None));

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed["all"].as_array().unwrap().is_empty());
        assert!(parsed["filtered"].as_array().unwrap().is_empty());
        assert!(parsed.get("statistics").is_none());
    }

    #[test]
    fn test_csv_report_has_single_header() {
        let users = two_users();
        let out = render_with(OutputFormat::Csv, |p| p.display_report(&users, "S", None));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Section,Name,Username,Email,City",
                r#"all,"A","a","a@x.com","Springfield""#,
                r#"all,"B","b","b@x.com","Reno""#,
                r#"filtered,"A","a","a@x.com","Springfield""#,
            ]
        );
    }

    #[test]
    fn test_text_report_includes_stats() {
        let users = two_users();
        let stats = Statistics::collect(&users, "S");
        let out = render_with(OutputFormat::Minimal, |p| {
            p.display_report(&users, "S", Some(&stats))
        });

        assert!(out.contains("ALL USERS"));
        assert!(out.contains("STARTING WITH 'S'"));
        assert!(out.contains("Total Users: 2"));
    }

    #[test]
    fn test_statistics_report() {
        let users = two_users();
        let stats = Statistics::collect(&users, "S");
        let out = render_with(OutputFormat::Pretty, |p| p.display_statistics(&stats));

        assert!(out.contains("Total Users: 2"));
        assert!(out.contains("Unique Cities: 2"));
        assert!(out.contains("Cities starting with 'S': 1"));
        assert!(out.contains("Most common city: Springfield (1 users)"));
    }
}
