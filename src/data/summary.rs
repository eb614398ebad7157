//! Headline figures for the dashboard summary line.

use crate::session::{User, UserRole};

use super::format::{format_brl, format_date, status_label};
use super::types::{ClientStatus, DocumentStatus, PaymentStatus, TaskStatus};
use super::OfficeData;

/// One headline figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
    /// Short qualifier shown after the value.
    pub detail: String,
    /// Status keyword that picks the value colour.
    pub status: &'static str,
}

impl Stat {
    fn new(
        title: &'static str,
        value: impl Into<String>,
        detail: impl Into<String>,
        status: &'static str,
    ) -> Self {
        Self {
            title,
            value: value.into(),
            detail: detail.into(),
            status,
        }
    }
}

/// The figures `user` sees above the table.
///
/// Office staff get office-wide counts. A client gets figures for its own
/// company, or for every company when it has none.
pub fn summary_for(data: &OfficeData, user: &User) -> Vec<Stat> {
    match user.role {
        UserRole::Office => office_summary(data),
        UserRole::Client => client_summary(data, OfficeData::scope(user)),
    }
}

fn office_summary(data: &OfficeData) -> Vec<Stat> {
    let open_payments = data
        .payments
        .iter()
        .filter(|p| p.status != PaymentStatus::Paid)
        .count();
    let overdue = data
        .payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Overdue)
        .count();
    let open_tasks = data
        .tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done)
        .count();
    let active_clients = data
        .clients
        .iter()
        .filter(|c| c.status == ClientStatus::Active)
        .count();

    vec![
        Stat::new(
            "Pending payments",
            open_payments.to_string(),
            format!("{} overdue", overdue),
            if overdue > 0 { "overdue" } else { "pending" },
        ),
        Stat::new("Open tasks", open_tasks.to_string(), "not done", "todo"),
        Stat::new(
            "Clients",
            data.clients.len().to_string(),
            format!("{} active", active_clients),
            "active",
        ),
    ]
}

fn client_summary(data: &OfficeData, company: Option<&str>) -> Vec<Stat> {
    let owned = |client_id: Option<&str>| company.map_or(true, |c| client_id == Some(c));

    let next_payment = data
        .payments
        .iter()
        .filter(|p| owned(Some(p.client_id.as_str())) && p.status != PaymentStatus::Paid)
        .min_by_key(|p| p.due_date);
    let next_payment = match next_payment {
        Some(p) => Stat::new(
            "Next payment",
            format_brl(p.amount),
            format!("due {}", format_date(&p.due_date)),
            p.status.as_str(),
        ),
        None => Stat::new("Next payment", "-", "nothing due", "paid"),
    };

    let pending_documents = data
        .documents
        .iter()
        .filter(|d| owned(Some(d.client_id.as_str())) && d.status == DocumentStatus::Pending)
        .count();
    let open_tasks = data
        .tasks
        .iter()
        .filter(|t| owned(t.client_id.as_deref()) && t.status != TaskStatus::Done)
        .count();

    let account = company.and_then(|c| data.clients.iter().find(|client| client.id == c));
    let account = match account {
        Some(client) => Stat::new(
            "Account",
            status_label(client.status.as_str()),
            format!("{} plan", client.plan.label()),
            client.status.as_str(),
        ),
        None => Stat::new("Account", "-", "no company", "unknown"),
    };

    vec![
        next_payment,
        Stat::new(
            "Pending documents",
            pending_documents.to_string(),
            "awaiting processing",
            if pending_documents > 0 { "pending" } else { "processed" },
        ),
        Stat::new("Open tasks", open_tasks.to_string(), "for your company", "todo"),
        account,
    ]
}
