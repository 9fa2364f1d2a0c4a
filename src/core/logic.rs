use crate::core::calculator::DelayPolicy;
use crate::core::calculator::timeline::{Timeline, build_timeline};
use crate::core::extract::extract_ticket;
use crate::docx::DocumentBody;
use crate::errors::{AppError, AppResult};
use crate::models::ticket::Ticket;

#[derive(Debug, Clone)]
pub struct TicketReport {
    pub ticket: Ticket,
    pub timeline: Timeline,
}

pub struct Core;

impl Core {
    /// Extract the ticket from a document body and compute its timeline.
    /// `priority` overrides the label found in the Details table.
    pub fn build_ticket_report(
        body: &DocumentBody,
        priority: Option<&str>,
        policy: &DelayPolicy,
    ) -> AppResult<TicketReport> {
        let ticket = extract_ticket(body)?;

        let label = priority
            .or_else(|| ticket.details.priority())
            .ok_or(AppError::MissingPriority)?
            .to_string();

        let timeline = build_timeline(&ticket.updates, &label, policy)?;

        Ok(TicketReport { ticket, timeline })
    }
}
