use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::text::{DOT_SEPARATOR, category_line, pluralize, title_case};
use crate::presentation::view_models::SummaryReport;

pub struct SummaryView<'a> {
    report: &'a SummaryReport,
    enable_color: bool,
}

impl<'a> SummaryView<'a> {
    pub fn new(report: &'a SummaryReport, enable_color: bool) -> Self {
        Self {
            report,
            enable_color,
        }
    }

    fn heading(&self, f: &mut fmt::Formatter, text: &str) -> fmt::Result {
        if self.enable_color {
            writeln!(f, "{}", text.bold())
        } else {
            writeln!(f, "{}", text)
        }
    }
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.report.summary;

        self.heading(f, "Martial soul compendium")?;
        writeln!(f, "  Source:   {}", self.report.source)?;
        writeln!(
            f,
            "  Souls:    {}{DOT_SEPARATOR}{} at grade 7+",
            summary.total, summary.rare
        )?;
        let holder = summary
            .highest_holder
            .as_deref()
            .unwrap_or("Awaiting discoveries.");
        if self.enable_color {
            writeln!(
                f,
                "  Highest:  Grade {} ({})",
                summary.highest_grade.cyan(),
                holder
            )?;
        } else {
            writeln!(f, "  Highest:  Grade {} ({})", summary.highest_grade, holder)?;
        }

        writeln!(f)?;
        self.heading(f, "Spotlight")?;
        for (index, entity) in self.report.top_entities.iter().enumerate() {
            writeln!(
                f,
                "  {}. {:<34} Grade {:<3} {}",
                index + 1,
                entity.name,
                entity.grade,
                category_line(&entity.category, &entity.affinities)
            )?;
        }

        writeln!(f)?;
        self.heading(f, "Affinity distribution")?;
        if summary.affinity_counts.is_empty() {
            writeln!(f, "  No affinities loaded")?;
        }
        for entry in &summary.affinity_counts {
            writeln!(
                f,
                "  {:<20} {}",
                title_case(&entry.affinity),
                pluralize(entry.count, "soul", "souls")
            )?;
        }

        writeln!(f)?;
        self.heading(f, "Grade ladder")?;
        for entry in summary.grade_counts_descending() {
            let label = format!("Grade {}", entry.grade);
            writeln!(
                f,
                "  {:<20} {}",
                label,
                pluralize(entry.count, "entry", "entries")
            )?;
        }

        Ok(())
    }
}
