use crate::config::Config;
use crate::core::calculator::DelayPolicy;
use crate::core::dates::sort_dates;
use crate::core::logic::{Core, TicketReport};
use crate::core::scan::{SCAN_HEADERS, scan_text};
use crate::docx::DocxReader;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, StatusRowExport, render_delay};
use crate::ui::messages::{field, header, info, warning};
use crate::utils::colors::{color_for_delay, paint};
use crate::utils::path::sibling_with_extension;
use crate::utils::table::Table;
use crate::utils::time::{format_hours, format_timestamp, parse_timestamp};
use std::path::{Path, PathBuf};

pub struct ReportLogic;

impl ReportLogic {
    fn load(file: &Path, priority: Option<&str>, policy: &DelayPolicy) -> AppResult<TicketReport> {
        let body = DocxReader::open(file)?;
        Core::build_ticket_report(&body, priority, policy)
    }

    /// Surface data-quality problems of a timeline as warnings.
    fn warn_issues(report: &TicketReport) {
        let tl = &report.timeline;

        if tl.mismatches > 0 {
            warning(format!(
                "{} status change(s) do not continue the previous status",
                tl.mismatches
            ));
        }

        for e in tl.breaches() {
            warning(format!(
                "{} → {} at {} exceeded the {}h threshold for '{}'",
                e.update.from_status_str(),
                e.update.to_status,
                e.update.effective_time_str(),
                format_hours(tl.threshold_hours),
                tl.priority
            ));
        }
    }

    /// Extract, compute and write the status history of one ticket.
    pub fn report(
        file: &Path,
        format: ExportFormat,
        out: Option<&Path>,
        priority: Option<&str>,
        force: bool,
        cfg: &Config,
    ) -> AppResult<PathBuf> {
        let policy = cfg.delay_policy()?;
        let report = Self::load(file, priority, &policy)?;

        info(format!(
            "{} status change(s) read from {}",
            report.timeline.entries.len(),
            file.display()
        ));
        Self::warn_issues(&report);

        let path = out
            .map(Path::to_path_buf)
            .unwrap_or_else(|| sibling_with_extension(file, format.as_str()));

        let rows = StatusRowExport::from_timeline(&report.timeline);
        ExportLogic::export(&rows, format, &path, force)?;

        Ok(path)
    }

    /// Print the status history of one ticket as a table.
    pub fn show(file: &Path, priority: Option<&str>, cfg: &Config) -> AppResult<()> {
        let policy = cfg.delay_policy()?;
        let report = Self::load(file, priority, &policy)?;
        let tl = &report.timeline;

        header(
            report
                .ticket
                .details
                .ticket_id()
                .map(|id| format!("Ticket {id}"))
                .unwrap_or_else(|| file.display().to_string()),
        );
        field("Priority", &tl.priority);
        field("Threshold", format!("{}h", format_hours(tl.threshold_hours)));
        println!();

        let mut table = Table::new(&[
            "Updater", "From", "To", "Effective", "Hours", "Delay", "Note",
        ]);
        for e in &tl.entries {
            table.add_row(vec![
                e.update.updater.clone(),
                e.update.from_status_str().to_string(),
                e.update.to_status.clone(),
                e.update.effective_time_str(),
                render_delay(&e.status_hours),
                render_delay(&e.update_delay),
                e.update.note_str().to_string(),
            ]);
        }

        let lines = table.render_lines();
        for (i, line) in lines.iter().enumerate() {
            // first two lines are header and separator
            match i.checked_sub(2).and_then(|r| tl.entries.get(r)) {
                Some(e) => println!(
                    "{}",
                    paint(
                        line,
                        color_for_delay(e.status_hours.hours(), tl.threshold_hours)
                    )
                ),
                None => println!("{line}"),
            }
        }
        println!();

        Self::warn_issues(&report);
        Ok(())
    }

    /// Compute and print a single delay.
    pub fn delay(start: &str, end: &str, priority: &str, cfg: &Config) -> AppResult<f64> {
        let policy = cfg.delay_policy()?;
        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;
        let rule = policy.rule(priority)?;
        let hours = policy.delay_hours(start, end, priority)?;

        field("From", format_timestamp(&start));
        field("To", format_timestamp(&end));
        field(
            "Mode",
            if rule.duty_day_only {
                "duty day"
            } else {
                "wall clock"
            },
        );
        println!("{}", format_hours(hours));

        Ok(hours)
    }

    /// Clause scan of the flattened document, written as CSV.
    pub fn scan(file: &Path, out: Option<&Path>, force: bool, cfg: &Config) -> AppResult<PathBuf> {
        let body = DocxReader::open(file)?;
        let rows = scan_text(&body.plain_text(), &cfg.status_keywords)?;

        if rows.is_empty() {
            warning("No status clauses found in document.");
        } else {
            info(format!("{} status clause(s) found", rows.len()));
        }

        let path = out
            .map(Path::to_path_buf)
            .unwrap_or_else(|| sibling_with_extension(file, ExportFormat::Csv.as_str()));

        let cells: Vec<Vec<String>> = rows.iter().map(|r| r.to_cells()).collect();
        ExportLogic::export_table(&SCAN_HEADERS, &cells, &path, force)?;

        Ok(path)
    }

    pub fn sort_dates(dates: &[String], fmt: &str) -> AppResult<()> {
        for d in sort_dates(dates, fmt)? {
            println!("{d}");
        }
        Ok(())
    }
}
