//! Typed HTML contract renderer.
//!
//! Builds the charter agreement HTML section by section from the typed
//! document model. Section order follows the standard agreement layout:
//! header, parties, risk summary, vessel specifications, charter terms,
//! financial terms, selected clauses, insurance, execution.

use crate::domain::contract::ContractDocument;
use crate::ports::{RenderError, RenderedContract, TemplateRenderer};

const STYLE: &str = r#"
body { font-family: 'Times New Roman', serif; font-size: 11px; line-height: 1.4; color: #333; margin: 20px; }
.header { text-align: center; border-bottom: 3px solid #1e3a8a; padding-bottom: 20px; margin-bottom: 30px; }
.title { font-size: 24px; font-weight: bold; color: #1e3a8a; text-transform: uppercase; }
.parties { background: #f8fafc; padding: 20px; border-left: 4px solid #1e3a8a; margin: 20px 0; }
.vessel-specs { background: #f1f5f9; border: 1px solid #cbd5e1; padding: 15px; margin: 15px 0; }
.risk-assessment { background: #fef3c7; border: 1px solid #f59e0b; padding: 15px; margin: 15px 0; }
.selected-clause { background: #ecfdf5; border-left: 4px solid #10b981; padding: 10px; margin: 10px 0; }
.financial-summary { background: #f0f9ff; border: 1px solid #0ea5e9; padding: 15px; margin: 15px 0; }
h1 { color: #1e3a8a; font-size: 16px; border-bottom: 2px solid #1e3a8a; margin-top: 25px; }
h2 { color: #3730a3; font-size: 14px; margin-top: 15px; }
table { width: 100%; border-collapse: collapse; margin: 10px 0; }
th, td { border: 1px solid #cbd5e1; padding: 8px; text-align: left; }
th { background-color: #f1f5f9; font-weight: bold; }
"#;

/// Renders contracts with the built-in agreement template.
#[derive(Debug, Clone, Default)]
pub struct HtmlTemplateRenderer;

impl HtmlTemplateRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }

    fn header_section(&self, doc: &ContractDocument) -> String {
        format!(
            r#"<div class="header">
  <div class="title">Yacht Charter Agreement</div>
  <div style="font-size: 16px; margin: 10px 0;">{vessel} - Contract {id}</div>
  <div>Version {version} - {date}</div>
  <div style="font-size: 10px; margin-top: 10px;">Template: {template} | Language: {language}</div>
</div>
"#,
            vessel = escape(&doc.vessel.name),
            id = doc.contract_id,
            version = escape(&doc.metadata.version_number),
            date = doc.generated_at.agreement_date(),
            template = escape(&doc.metadata.template_name),
            language = escape(&doc.metadata.contract_language),
        )
    }

    fn parties_section(&self, doc: &ContractDocument) -> String {
        let mut section = format!(
            r#"<div class="parties">
  <p><strong>LESSOR (Charter Company):</strong> {lessor}<br>{lessor_address}<br>
  Contact: {lessor_contact} | Email: {lessor_email} | Phone: {lessor_phone}</p>
  <p><strong>LESSEE (Charter Client):</strong> {lessee}<br>{lessee_address}<br>
  Contact: {lessee_contact} | Email: {lessee_email} | Phone: {lessee_phone}</p>
"#,
            lessor = escape(&doc.parties.lessor.name),
            lessor_address = multiline(&doc.parties.lessor.address),
            lessor_contact = escape(&doc.parties.lessor.contact),
            lessor_email = escape(&doc.parties.lessor.email),
            lessor_phone = escape(&doc.parties.lessor.phone),
            lessee = escape(&doc.parties.lessee.name),
            lessee_address = multiline(&doc.parties.lessee.address),
            lessee_contact = escape(&doc.parties.lessee.contact),
            lessee_email = escape(&doc.parties.lessee.email),
            lessee_phone = escape(&doc.parties.lessee.phone),
        );

        if let Some(broker) = &doc.parties.broker {
            section.push_str(&format!(
                "  <p><strong>Broker/Agent:</strong> {}",
                escape(broker)
            ));
            if doc.parties.broker_commission_pct > 0.0 {
                section.push_str(&format!(
                    " (Commission: {}%)",
                    doc.parties.broker_commission_pct
                ));
            }
            section.push_str("</p>\n");
        }

        section.push_str("</div>\n");
        section
    }

    fn risk_section(&self, doc: &ContractDocument) -> String {
        let factors = doc.risk.active_factor_names();
        let factors = if factors.is_empty() {
            "Standard risk profile".to_string()
        } else {
            factors.join(", ")
        };

        let mut section = format!(
            r#"<div class="risk-assessment">
  <h2>Risk Assessment Summary</h2>
  <p><strong>Overall Risk Score:</strong> {score:.2} ({level})</p>
  <p><strong>Risk Factors:</strong> {factors}</p>
  <p><strong>Recommended Hull Insurance:</strong> USD {hull}</p>
  <p><strong>Recommended Liability Insurance:</strong> USD {liability}</p>
  <table>
    <tr><th>Category</th><th>Raw Score</th><th>Weighted Score</th></tr>
"#,
            score = doc.risk.overall_score,
            level = doc.risk.risk_level,
            factors = escape(&factors),
            hull = thousands(doc.recommended_hull_insurance()),
            liability = thousands(doc.recommended_liability_insurance()),
        );

        for breakdown in &doc.risk.breakdown {
            section.push_str(&format!(
                "    <tr><td>{}</td><td>{:.2}</td><td>{:.2}</td></tr>\n",
                escape(&breakdown.category),
                breakdown.raw_score,
                breakdown.weighted_score,
            ));
        }
        section.push_str("  </table>\n</div>\n");
        section
    }

    fn vessel_section(&self, doc: &ContractDocument) -> String {
        format!(
            r#"<h1>1. Vessel Specifications</h1>
<div class="vessel-specs">
  <table>
    <tr><th>Vessel</th><th>Specifications</th><th>Performance</th><th>Capacities</th></tr>
    <tr>
      <td><strong>Name:</strong> {name}<br><strong>Type:</strong> {yacht_type}<br><strong>Registration:</strong> {official}<br><strong>Flag:</strong> {flag}</td>
      <td><strong>LOA:</strong> {loa}m<br><strong>Beam:</strong> {beam}m<br><strong>Draft:</strong> {draft}m<br><strong>Engine:</strong> {engine} HP</td>
      <td><strong>Max Speed:</strong> {max_speed} knots<br><strong>Cruising:</strong> {cruising} knots<br><strong>Fuel Policy:</strong> {fuel}</td>
      <td><strong>Guests:</strong> {guests}<br><strong>Crew:</strong> {crew}</td>
    </tr>
  </table>
</div>
"#,
            name = escape(&doc.vessel.name),
            yacht_type = escape(&doc.vessel.yacht_type),
            official = escape(&doc.vessel.official_number),
            flag = escape(&doc.vessel.flag_state),
            loa = doc.vessel.length_overall_m,
            beam = doc.vessel.beam_m,
            draft = doc.vessel.draft_m,
            engine = doc.vessel.engine_power_hp,
            max_speed = doc.vessel.max_speed_knots,
            cruising = doc.vessel.cruising_speed_knots,
            fuel = escape(&doc.financial.fuel_policy),
            guests = doc.vessel.guest_capacity,
            crew = doc.vessel.crew_capacity,
        )
    }

    fn terms_section(&self, doc: &ContractDocument) -> String {
        let mut section = format!(
            r#"<h1>2. Charter Terms &amp; Itinerary</h1>
<p><strong>Charter Period:</strong> {start} to {end}</p>
<p><strong>Duration:</strong> {duration} days</p>
<p><strong>Delivery Location:</strong> {delivery} | <strong>Return Location:</strong> {ret}</p>
<p><strong>Daily Rate:</strong> {currency} {rate}</p>
<p><strong>Total Charter Value:</strong> {currency} {total}</p>
<p><strong>Operational Area:</strong> {area}</p>
"#,
            start = doc.terms.start_date.format("%d %B %Y"),
            end = doc.terms.end_date.format("%d %B %Y"),
            duration = doc.duration_days(),
            delivery = escape(&doc.terms.delivery_location),
            ret = escape(&doc.terms.return_location),
            currency = escape(&doc.terms.currency),
            rate = thousands(doc.terms.daily_rate),
            total = thousands(doc.terms.total_charter_value()),
            area = escape(&doc.terms.operational_area),
        );

        if let Some(requests) = &doc.terms.special_requests {
            section.push_str(&format!(
                "<h2>Special Requests &amp; Requirements</h2>\n<p>{}</p>\n",
                multiline(requests)
            ));
        }
        section
    }

    fn financial_section(&self, doc: &ContractDocument) -> String {
        format!(
            r#"<h1>3. Financial Terms</h1>
<div class="financial-summary">
  <p><strong>Initial Payment:</strong> {initial}% upon signing</p>
  <p><strong>Final Payment:</strong> {final_pct}% {timing}</p>
  <p><strong>Security Deposit:</strong> {currency} {deposit} ({method})</p>
  <p><strong>Fuel Policy:</strong> {fuel}</p>
</div>
"#,
            initial = doc.financial.payment_schedule_initial_pct,
            final_pct = doc.financial.payment_schedule_final_pct,
            timing = escape(&doc.financial.payment_timing),
            currency = escape(&doc.terms.currency),
            deposit = thousands(doc.financial.security_deposit),
            method = escape(&doc.financial.deposit_method),
            fuel = escape(&doc.financial.fuel_policy),
        )
    }

    fn clauses_section(&self, doc: &ContractDocument) -> String {
        if doc.clauses.is_empty() {
            return String::new();
        }

        let mut section = String::from("<h1>4. Selected Contract Clauses</h1>\n");
        for clause in &doc.clauses {
            section.push_str(&format!(
                r#"<div class="selected-clause">
  <h2>{name} ({source})</h2>
  <p>{content}</p>
  <p style="font-size: 9px; color: #6b7280;"><strong>Category:</strong> {category}</p>
</div>
"#,
                name = escape(&clause.name),
                source = clause.source,
                content = multiline(&clause.content),
                category = escape(&clause.category),
            ));
        }
        section
    }

    fn insurance_section(&self, doc: &ContractDocument) -> String {
        format!(
            r#"<h1>5. Insurance Requirements</h1>
<table>
  <tr><th>Coverage Type</th><th>Required Amount</th><th>Recommended</th><th>Risk Factor</th></tr>
  <tr><td>Hull &amp; Machinery</td><td>USD {hull}</td><td>USD {hull_rec}</td><td>{score:.2}x</td></tr>
  <tr><td>Third Party Liability</td><td>USD {liability}</td><td>USD {liability_rec}</td><td>{score:.2}x</td></tr>
</table>
"#,
            hull = thousands(doc.financial.hull_insurance),
            hull_rec = thousands(doc.recommended_hull_insurance()),
            liability = thousands(doc.financial.liability_insurance),
            liability_rec = thousands(doc.recommended_liability_insurance()),
            score = doc.risk.overall_score.max(1.0),
        )
    }

    fn execution_section(&self, doc: &ContractDocument) -> String {
        format!(
            r#"<h1>Execution</h1>
<p><strong>Governing Law:</strong> {law} | <strong>Cancellation Policy:</strong> {cancellation}</p>
<p><strong>LESSOR:</strong> {lessor}<br>Signature: _________________________ Date: _________</p>
<p><strong>LESSEE:</strong> {lessee}<br>Signature: _________________________ Date: _________</p>
"#,
            law = escape(&doc.metadata.governing_law),
            cancellation = escape(&doc.metadata.cancellation_policy),
            lessor = escape(&doc.parties.lessor.name),
            lessee = escape(&doc.parties.lessee.name),
        )
    }
}

impl TemplateRenderer for HtmlTemplateRenderer {
    fn render(&self, document: &ContractDocument) -> Result<RenderedContract, RenderError> {
        let mut body = String::new();
        body.push_str(&self.header_section(document));
        body.push_str(&self.parties_section(document));
        body.push_str(&self.risk_section(document));
        body.push_str(&self.vessel_section(document));
        body.push_str(&self.terms_section(document));
        body.push_str(&self.financial_section(document));
        body.push_str(&self.clauses_section(document));
        body.push_str(&self.insurance_section(document));
        body.push_str(&self.execution_section(document));

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Yacht Charter Contract - {title}</title>
<style>{style}</style>
</head>
<body>
{body}</body>
</html>"#,
            title = escape(&document.vessel.name),
            style = STYLE,
            body = body,
        );

        Ok(RenderedContract {
            html,
            filename_stem: format!(
                "contract_v{}_{}",
                document.metadata.version_number, document.contract_id
            ),
        })
    }
}

/// Escapes HTML special characters.
fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escapes and converts newlines to `<br>`.
fn multiline(input: &str) -> String {
    escape(input).replace('\n', "<br>")
}

/// Formats a monetary amount with thousands separators, no decimals.
fn thousands(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
