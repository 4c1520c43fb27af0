//! PDF exporter built on `lopdf`.
//!
//! Lays the contract out as paginated text in the order the agreement
//! prints: header, vessel, charter terms, parties, financial terms, risk
//! summary, clauses, execution. The fallback path produces a one-page
//! PDF carrying the contract id and vessel name, so export always yields
//! a downloadable artifact.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::error;

use crate::domain::contract::ContractDocument;
use crate::ports::{ExportError, PdfExporter, RenderedContract};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN_LEFT: i64 = 50;
const TOP_Y: i64 = 790;
const LEADING: i64 = 14;
const LINES_PER_PAGE: usize = 52;
const WRAP_WIDTH: usize = 92;

/// `lopdf`-based implementation of the `PdfExporter` port.
#[derive(Debug, Clone, Default)]
pub struct LopdfExporter;

impl LopdfExporter {
    /// Creates a new exporter.
    pub fn new() -> Self {
        Self
    }

    fn contract_lines(&self, doc: &ContractDocument) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push("YACHT CHARTER AGREEMENT".to_string());
        lines.push(String::new());
        lines.push(format!("Contract ID: {}", doc.contract_id));
        lines.push(format!(
            "Version: {} - {}",
            doc.metadata.version_number,
            doc.generated_at.agreement_date()
        ));
        lines.push(String::new());

        lines.push("1. VESSEL SPECIFICATIONS".to_string());
        lines.push(format!("Vessel: {} ({})", doc.vessel.name, doc.vessel.yacht_type));
        lines.push(format!(
            "LOA: {}m | Beam: {}m | Draft: {}m | Flag: {}",
            doc.vessel.length_overall_m,
            doc.vessel.beam_m,
            doc.vessel.draft_m,
            doc.vessel.flag_state
        ));
        lines.push(format!(
            "Guests: {} | Crew: {} | Engine: {} HP",
            doc.vessel.guest_capacity, doc.vessel.crew_capacity, doc.vessel.engine_power_hp
        ));
        lines.push(String::new());

        lines.push("2. CHARTER TERMS".to_string());
        lines.push(format!(
            "Period: {} to {} ({} days)",
            doc.terms.start_date, doc.terms.end_date, doc.duration_days()
        ));
        lines.push(format!(
            "Daily Rate: {} {:.0} | Total Value: {} {:.0}",
            doc.terms.currency,
            doc.terms.daily_rate,
            doc.terms.currency,
            doc.terms.total_charter_value()
        ));
        lines.push(format!("Operational Area: {}", doc.terms.operational_area));
        lines.push(String::new());

        lines.push("3. PARTIES".to_string());
        lines.push(format!("Lessor: {}", doc.parties.lessor.name));
        lines.push(format!("Lessee: {}", doc.parties.lessee.name));
        if let Some(broker) = &doc.parties.broker {
            lines.push(format!("Broker: {}", broker));
        }
        lines.push(String::new());

        lines.push("4. FINANCIAL TERMS".to_string());
        lines.push(format!(
            "Payment: {}% on signing, {}% {}",
            doc.financial.payment_schedule_initial_pct,
            doc.financial.payment_schedule_final_pct,
            doc.financial.payment_timing
        ));
        lines.push(format!(
            "Security Deposit: {} {:.0} ({})",
            doc.terms.currency, doc.financial.security_deposit, doc.financial.deposit_method
        ));
        lines.push(String::new());

        lines.push("5. RISK ASSESSMENT".to_string());
        lines.push(format!(
            "Overall Risk Score: {:.2} ({})",
            doc.risk.overall_score, doc.risk.risk_level
        ));
        for breakdown in &doc.risk.breakdown {
            if !breakdown.active_factors.is_empty() {
                lines.push(format!(
                    "{}: {:.2} weighted ({})",
                    breakdown.category,
                    breakdown.weighted_score,
                    breakdown.active_factors.join(", ")
                ));
            }
        }
        lines.push(format!(
            "Recommended Hull Insurance: USD {:.0}",
            doc.recommended_hull_insurance()
        ));
        lines.push(format!(
            "Recommended Liability Insurance: USD {:.0}",
            doc.recommended_liability_insurance()
        ));
        lines.push(String::new());

        if !doc.clauses.is_empty() {
            lines.push("6. SELECTED CLAUSES".to_string());
            for (i, clause) in doc.clauses.iter().enumerate() {
                lines.push(format!("{}. {} ({})", i + 1, clause.name, clause.source));
                for paragraph in clause.content.lines() {
                    lines.extend(wrap(paragraph, WRAP_WIDTH));
                }
                lines.push(String::new());
            }
        }

        lines.push("EXECUTION".to_string());
        lines.push(format!("Governing Law: {}", doc.metadata.governing_law));
        lines.push(format!("LESSOR: {}  Signature: ____________", doc.parties.lessor.name));
        lines.push(format!("LESSEE: {}  Signature: ____________", doc.parties.lessee.name));

        lines
    }

    fn build_text_pdf(&self, lines: &[String]) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids: Vec<Object> = Vec::new();
        for chunk in lines.chunks(LINES_PER_PAGE) {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 10.into()]),
                Operation::new("TL", vec![LEADING.into()]),
                Operation::new("Td", vec![MARGIN_LEFT.into(), TOP_Y.into()]),
            ];
            for line in chunk {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(sanitize(line))],
                ));
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| ExportError::LayoutFailed(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            page_ids.push(page_id.into());
        }

        let count = page_ids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        Ok(bytes)
    }
}

impl PdfExporter for LopdfExporter {
    fn export(
        &self,
        document: &ContractDocument,
        _rendered: &RenderedContract,
    ) -> Result<Vec<u8>, ExportError> {
        self.build_text_pdf(&self.contract_lines(document))
    }

    fn fallback(&self, document: &ContractDocument) -> Vec<u8> {
        let lines = vec![
            "YACHT CHARTER CONTRACT".to_string(),
            String::new(),
            format!("Contract ID: {}", document.contract_id),
            format!("Vessel: {}", document.vessel.name),
            String::new(),
            "Full contract rendering was unavailable; this is a minimal record.".to_string(),
        ];
        self.build_text_pdf(&lines).unwrap_or_else(|e| {
            // The writer targets an in-memory buffer; reaching this arm
            // means lopdf itself failed, and there is nothing to return.
            error!(error = %e, "fallback PDF generation failed");
            Vec::new()
        })
    }
}

/// Restricts text to the WinAnsi-safe ASCII range the base font covers.
fn sanitize(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}

/// Greedy word wrap at the given width.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::HtmlTemplateRenderer;
    use crate::domain::clause::ClauseSource;
    use crate::domain::contract::{
        CharterTerms, ContractAssembler, ContractMetadata, FinancialTerms, Parties,
        SelectedClause, VesselSpecs,
    };
    use crate::domain::risk::{FactorSelections, RiskEngine};
    use crate::ports::TemplateRenderer;
    use chrono::NaiveDate;

    fn sample_document() -> ContractDocument {
        ContractAssembler::assemble(
            VesselSpecs {
                name: "M/Y Meltemi".to_string(),
                ..Default::default()
            },
            CharterTerms {
                start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 7, 8).unwrap(),
                delivery_location: "Monaco".to_string(),
                return_location: "Monaco".to_string(),
                operational_area: "Western Mediterranean".to_string(),
                daily_rate: 12_500.0,
                currency: "EUR".to_string(),
                special_requests: None,
            },
            Parties::default(),
            FinancialTerms::default(),
            RiskEngine::new().compute(&FactorSelections::new()),
            vec![SelectedClause {
                name: "Standard Cancellation Terms".to_string(),
                content: "Cancellation more than 90 days prior incurs a 10% fee.".to_string(),
                category: "Cancellation Policy".to_string(),
                source: ClauseSource::Library,
            }],
            ContractMetadata::default(),
        )
        .unwrap()
    }

    #[test]
    fn export_produces_a_pdf_header() {
        let document = sample_document();
        let rendered = HtmlTemplateRenderer::new().render(&document).unwrap();
        let bytes = LopdfExporter::new().export(&document, &rendered).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn fallback_is_a_valid_pdf() {
        let document = sample_document();
        let bytes = LopdfExporter::new().fallback(&document);
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn contract_lines_cover_every_section() {
        let document = sample_document();
        let lines = LopdfExporter::new().contract_lines(&document);
        let joined = lines.join("\n");

        assert!(joined.contains("VESSEL SPECIFICATIONS"));
        assert!(joined.contains("CHARTER TERMS"));
        assert!(joined.contains("FINANCIAL TERMS"));
        assert!(joined.contains("RISK ASSESSMENT"));
        assert!(joined.contains("SELECTED CLAUSES"));
        assert!(joined.contains("EXECUTION"));
        assert!(joined.contains(document.contract_id.as_str()));
    }

    #[test]
    fn wrap_respects_width() {
        let text = "a ".repeat(200);
        for line in wrap(&text, 40) {
            assert!(line.len() <= 40);
        }
    }

    #[test]
    fn sanitize_replaces_non_ascii() {
        assert_eq!(sanitize("Côte d'Azur"), "C?te d'Azur");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn long_clause_lists_paginate() {
        let mut document = sample_document();
        for i in 0..40 {
            document.clauses.push(SelectedClause {
                name: format!("Filler Clause {i}"),
                content: "Lorem ipsum dolor sit amet. ".repeat(10),
                category: "Padding".to_string(),
                source: ClauseSource::Custom,
            });
        }
        let rendered = HtmlTemplateRenderer::new().render(&document).unwrap();
        let bytes = LopdfExporter::new().export(&document, &rendered).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
