//! Typed domain records for the accounting office.

use chrono::NaiveDate;

/// Subscription plan of a client company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Basic,
    Pro,
    Enterprise,
}

impl Plan {
    pub fn label(self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        }
    }
}

/// Account status of a client company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Pending => "pending",
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// A client company of the office.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub cnpj: String,
    pub email: String,
    pub phone: String,
    pub plan: Plan,
    pub status: ClientStatus,
    pub last_payment: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub monthly_recurrence: bool,
    pub address: Option<Address>,
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Pix,
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

/// A billed monthly fee.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    pub client_id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub description: String,
}

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

/// An employee on a client's payroll.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub benefits: Vec<String>,
    pub inss: bool,
    pub fgts: bool,
    pub status: EmployeeStatus,
}

/// Workflow column of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    /// The next board column, wrapping from done back to todo.
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    /// Numeric rank so that sorting by priority follows urgency.
    pub fn rank(self) -> i64 {
        match self {
            TaskPriority::Low => 1,
            TaskPriority::Medium => 2,
            TaskPriority::High => 3,
        }
    }
}

/// A comment left on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskComment {
    pub user_name: String,
    pub content: String,
    pub created_at: NaiveDate,
}

/// A piece of office work, optionally tied to a client.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assigned_to: String,
    pub client_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub comments: Vec<TaskComment>,
    pub attachments: Vec<String>,
}

/// Kind of document in the digital archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Nfe,
    Cte,
    Contract,
    Certificate,
    Report,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Nfe => "NF-e",
            DocumentType::Cte => "CT-e",
            DocumentType::Contract => "Contract",
            DocumentType::Certificate => "Certificate",
            DocumentType::Report => "Report",
        }
    }
}

/// Processing status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Processed,
    Sent,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Processed => "processed",
            DocumentStatus::Sent => "sent",
        }
    }
}

/// A file uploaded by or for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub client_id: String,
    pub doc_type: DocumentType,
    pub name: String,
    pub file_url: String,
    pub uploaded_at: NaiveDate,
    pub status: DocumentStatus,
    pub tags: Vec<String>,
}
