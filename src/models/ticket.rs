use super::update::UpdateRecord;

/// Ordered key/value pairs from the Details table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDetails {
    pub fields: Vec<(String, String)>,
}

impl TicketDetails {
    /// Case-insensitive lookup of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    pub fn priority(&self) -> Option<&str> {
        self.get("Priority").or_else(|| self.get("Severity"))
    }

    pub fn ticket_id(&self) -> Option<&str> {
        ["Ticket Number", "Ticket", "Number"]
            .iter()
            .find_map(|k| self.get(k))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ticket {
    pub details: TicketDetails,
    pub updates: Vec<UpdateRecord>,
}
