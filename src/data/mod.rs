//! Office datasets and their normalization into table records.
//!
//! Each dataset is a typed domain struct. Before reaching the table it is
//! converted into a [`Record`] through [`ToRecord`], so the table never sees
//! loosely typed input.

mod columns;
pub mod format;
pub mod mock;
mod summary;
pub mod types;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::config::Settings;
use crate::session::{User, UserRole};
use crate::table::{CellValue, Column, DataTable, Record};

pub use summary::{summary_for, Stat};

use types::{Client, Document, Employee, Payment, Task, TaskStatus};

/// Maps client ids to company names for joined columns.
#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    names: HashMap<String, String>,
}

impl ClientDirectory {
    /// Build the directory from a client list.
    pub fn new(clients: &[Client]) -> Self {
        Self {
            names: clients
                .iter()
                .map(|c| (c.id.clone(), c.name.clone()))
                .collect(),
        }
    }

    /// Company name for a client id.
    pub fn name(&self, client_id: &str) -> Option<&str> {
        self.names.get(client_id).map(String::as_str)
    }

    fn value(&self, client_id: Option<&str>) -> CellValue {
        client_id
            .and_then(|id| self.name(id))
            .map(CellValue::from)
            .unwrap_or_default()
    }
}

/// Conversion of a domain struct into a table record.
pub trait ToRecord {
    /// Normalize into a record. `directory` resolves client names.
    fn to_record(&self, directory: &ClientDirectory) -> Record;
}

impl ToRecord for Client {
    fn to_record(&self, _directory: &ClientDirectory) -> Record {
        let address = self.address.as_ref().map(|a| {
            format!("{}, {} - {}, {}", a.street, a.city, a.state, a.zip_code)
        });
        Record::new()
            .with("id", self.id.as_str())
            .with("name", self.name.as_str())
            .with("cnpj", self.cnpj.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.as_str())
            .with("plan", self.plan.label())
            .with("status", self.status.as_str())
            .with("last_payment", self.last_payment)
            .with("next_due_date", self.next_due_date)
            .with("monthly_recurrence", self.monthly_recurrence)
            .with("address", address)
    }
}

impl ToRecord for Payment {
    fn to_record(&self, directory: &ClientDirectory) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("client_id", self.client_id.as_str())
            .with("client", directory.value(Some(self.client_id.as_str())))
            .with("amount", self.amount)
            .with("method", self.method.label())
            .with("status", self.status.as_str())
            .with("date", self.date)
            .with("due_date", self.due_date)
            .with("description", self.description.as_str())
    }
}

impl ToRecord for Employee {
    fn to_record(&self, directory: &ClientDirectory) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("client_id", self.client_id.as_str())
            .with("client", directory.value(Some(self.client_id.as_str())))
            .with("name", self.name.as_str())
            .with("position", self.position.as_str())
            .with("salary", self.salary)
            .with("benefits", self.benefits.clone())
            .with("inss", self.inss)
            .with("fgts", self.fgts)
            .with("status", self.status.as_str())
    }
}

impl ToRecord for Task {
    fn to_record(&self, directory: &ClientDirectory) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("title", self.title.as_str())
            .with("description", self.description.as_str())
            .with("status", self.status.as_str())
            .with("priority", self.priority.as_str())
            .with("priority_rank", self.priority.rank())
            .with("assigned_to", self.assigned_to.as_str())
            .with("client_id", self.client_id.as_deref())
            .with("client", directory.value(self.client_id.as_deref()))
            .with("due_date", self.due_date)
            .with("created_at", self.created_at)
            .with("updated_at", self.updated_at)
            .with("comments", self.comments.len() as i64)
            .with("attachments", self.attachments.clone())
    }
}

impl ToRecord for Document {
    fn to_record(&self, directory: &ClientDirectory) -> Record {
        Record::new()
            .with("id", self.id.as_str())
            .with("client_id", self.client_id.as_str())
            .with("client", directory.value(Some(self.client_id.as_str())))
            .with("type", self.doc_type.label())
            .with("name", self.name.as_str())
            .with("file_url", self.file_url.as_str())
            .with("uploaded_at", self.uploaded_at)
            .with("status", self.status.as_str())
            .with("tags", self.tags.clone())
    }
}

/// The office's working data: every dataset as typed records.
///
/// Loaded once per session. Task statuses can be changed in place; all other
/// datasets are read-only.
#[derive(Debug, Clone)]
pub struct OfficeData {
    clients: Vec<Client>,
    payments: Vec<Payment>,
    employees: Vec<Employee>,
    tasks: Vec<Task>,
    documents: Vec<Document>,
}

impl OfficeData {
    /// The bundled demo data.
    pub fn demo() -> Self {
        Self {
            clients: mock::clients(),
            payments: mock::payments(),
            employees: mock::employees(),
            tasks: mock::tasks(),
            documents: mock::documents(),
        }
    }

    /// Company a client-role user is restricted to. `None` means every row.
    pub fn scope(user: &User) -> Option<&str> {
        match user.role {
            UserRole::Client => user.company_id.as_deref(),
            UserRole::Office => None,
        }
    }

    /// Normalized records of `dataset` visible to `user`.
    ///
    /// A client-role user with a company sees only that company's rows.
    pub fn records(&self, dataset: Dataset, user: &User) -> Vec<Record> {
        let directory = ClientDirectory::new(&self.clients);
        let scope = Self::scope(user);
        let in_scope = |client_id: Option<&str>| scope.map_or(true, |s| client_id == Some(s));

        let records: Vec<Record> = match dataset {
            Dataset::Clients => self
                .clients
                .iter()
                .filter(|c| in_scope(Some(c.id.as_str())))
                .map(|c| c.to_record(&directory))
                .collect(),
            Dataset::Payments => self
                .payments
                .iter()
                .filter(|p| in_scope(Some(p.client_id.as_str())))
                .map(|p| p.to_record(&directory))
                .collect(),
            Dataset::Employees => self
                .employees
                .iter()
                .filter(|e| in_scope(Some(e.client_id.as_str())))
                .map(|e| e.to_record(&directory))
                .collect(),
            Dataset::Tasks => self
                .tasks
                .iter()
                .filter(|t| in_scope(t.client_id.as_deref()))
                .map(|t| t.to_record(&directory))
                .collect(),
            Dataset::Documents => self
                .documents
                .iter()
                .filter(|d| in_scope(Some(d.client_id.as_str())))
                .map(|d| d.to_record(&directory))
                .collect(),
        };

        debug!(
            dataset = dataset.name(),
            role = %user.role,
            rows = records.len(),
            "Dataset loaded"
        );
        records
    }

    /// Build a table of `dataset` for `user` configured from `settings`.
    pub fn table(&self, dataset: Dataset, user: &User, settings: &Settings) -> DataTable {
        DataTable::new(self.records(dataset, user), dataset.columns())
            .with_searchable(settings.searchable)
            .with_search_placeholder(settings.search_placeholder.clone())
            .with_page_size(settings.page_size)
    }

    /// Move the task with `id` to its next board column.
    ///
    /// Returns the new status, or `None` if no task has that id.
    pub fn advance_task(&mut self, id: &str) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        let from = task.status;
        task.status = from.next();
        info!(
            task = id,
            from = from.as_str(),
            to = task.status.as_str(),
            "Task moved"
        );
        Some(task.status)
    }
}

/// A browsable dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Dataset {
    Clients,
    Payments,
    Employees,
    Tasks,
    Documents,
}

impl Dataset {
    /// Every dataset, in tab order.
    pub const ALL: [Dataset; 5] = [
        Dataset::Clients,
        Dataset::Payments,
        Dataset::Employees,
        Dataset::Tasks,
        Dataset::Documents,
    ];

    /// Lowercase identifier used in config and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Clients => "clients",
            Dataset::Payments => "payments",
            Dataset::Employees => "employees",
            Dataset::Tasks => "tasks",
            Dataset::Documents => "documents",
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Dataset::Clients => "Clients",
            Dataset::Payments => "Payments",
            Dataset::Employees => "Payroll",
            Dataset::Tasks => "Tasks",
            Dataset::Documents => "Documents",
        }
    }

    /// Roles allowed to open this dataset.
    pub fn allowed_roles(self) -> &'static [UserRole] {
        match self {
            Dataset::Clients | Dataset::Payments | Dataset::Employees => &[UserRole::Office],
            Dataset::Tasks | Dataset::Documents => &[UserRole::Office, UserRole::Client],
        }
    }

    /// Whether `role` may open this dataset.
    pub fn is_allowed_for(self, role: UserRole) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Datasets visible to `role`, in tab order.
    pub fn visible_to(role: UserRole) -> Vec<Dataset> {
        Self::ALL
            .into_iter()
            .filter(|d| d.is_allowed_for(role))
            .collect()
    }

    /// Column descriptors for this dataset.
    pub fn columns(self) -> Vec<Column> {
        match self {
            Dataset::Clients => columns::client_columns(),
            Dataset::Payments => columns::payment_columns(),
            Dataset::Employees => columns::employee_columns(),
            Dataset::Tasks => columns::task_columns(),
            Dataset::Documents => columns::document_columns(),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == lower || (lower == "payroll" && *d == Dataset::Employees))
            .ok_or_else(|| format!("unknown dataset '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_from_str() {
        assert_eq!("clients".parse::<Dataset>(), Ok(Dataset::Clients));
        assert_eq!(" Tasks ".parse::<Dataset>(), Ok(Dataset::Tasks));
        assert_eq!("payroll".parse::<Dataset>(), Ok(Dataset::Employees));
        assert!("invoices".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_role_gating() {
        assert_eq!(Dataset::visible_to(UserRole::Office).len(), 5);
        assert_eq!(
            Dataset::visible_to(UserRole::Client),
            vec![Dataset::Tasks, Dataset::Documents]
        );
        assert!(!Dataset::Payments.is_allowed_for(UserRole::Client));
    }

    #[test]
    fn test_office_sees_every_row() {
        let user = User::demo_office();
        assert_eq!(OfficeData::demo().records(Dataset::Tasks, &user).len(), 5);
        assert_eq!(OfficeData::demo().records(Dataset::Documents, &user).len(), 4);
        assert_eq!(OfficeData::demo().records(Dataset::Clients, &user).len(), 5);
    }

    #[test]
    fn test_client_sees_own_company_only() {
        let user = User::demo_client();
        let tasks = OfficeData::demo().records(Dataset::Tasks, &user);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].value("client_id"), &CellValue::from("client-1"));

        let documents = OfficeData::demo().records(Dataset::Documents, &user);
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_client_role_without_company_is_unscoped() {
        let user = User::demo_office().with_role(UserRole::Client);
        assert_eq!(OfficeData::demo().records(Dataset::Tasks, &user).len(), 5);
    }

    #[test]
    fn test_payment_record_joins_client_name() {
        let records = OfficeData::demo().records(Dataset::Payments, &User::demo_office());
        assert_eq!(records[0].value("client"), &CellValue::from("Empresa ABC Ltda"));
        assert_eq!(records[0].value("amount"), &CellValue::Number(1200.0));
    }

    #[test]
    fn test_task_without_client_has_empty_client() {
        let records = OfficeData::demo().records(Dataset::Tasks, &User::demo_office());
        let report = records
            .iter()
            .find(|r| r.value("id") == &CellValue::from("task-3"))
            .unwrap();
        assert_eq!(report.value("client"), &CellValue::Empty);
        assert_eq!(report.value("client_id"), &CellValue::Empty);
    }

    #[test]
    fn test_client_address_is_flattened() {
        let records = OfficeData::demo().records(Dataset::Clients, &User::demo_office());
        assert_eq!(
            records[0].value("address"),
            &CellValue::from("Rua das Flores, 123, São Paulo - SP, 01234-567")
        );
        assert_eq!(records[1].value("address"), &CellValue::Empty);
    }

    #[test]
    fn test_table_applies_settings() {
        let settings = Settings {
            page_size: 4,
            searchable: false,
            search_placeholder: "Find...".to_string(),
            ..Settings::default()
        };
        let table = OfficeData::demo().table(Dataset::Payments, &User::demo_office(), &settings);
        assert_eq!(table.page_size(), 4);
        assert!(!table.is_searchable());
        assert_eq!(table.search_placeholder(), "Find...");
        assert_eq!(table.total_pages(), 4);
    }

    #[test]
    fn test_search_across_hidden_fields() {
        let mut table = OfficeData::demo().table(Dataset::Clients, &User::demo_office(), &Settings::default());
        table.set_search("rua das flores");
        assert_eq!(table.filtered_count(), 1);
    }

    #[test]
    fn test_sort_tasks_by_priority() {
        let mut table = OfficeData::demo().table(Dataset::Tasks, &User::demo_office(), &Settings::default());
        table.toggle_sort("priority_rank");
        table.toggle_sort("priority_rank");
        let first = table.page().rows[0].value("priority").clone();
        assert_eq!(first, CellValue::from("high"));
    }

    #[test]
    fn test_task_status_cycles() {
        assert_eq!(TaskStatus::Todo.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Todo);
    }

    #[test]
    fn test_advance_task_updates_records() {
        let mut data = OfficeData::demo();
        assert_eq!(data.advance_task("task-1"), Some(TaskStatus::InProgress));
        assert_eq!(data.advance_task("task-1"), Some(TaskStatus::Done));

        let records = data.records(Dataset::Tasks, &User::demo_office());
        let task = records
            .iter()
            .find(|r| r.value("id") == &CellValue::from("task-1"))
            .unwrap();
        assert_eq!(task.value("status"), &CellValue::from("done"));
        // Other tasks keep their status
        assert_eq!(records[1].value("status"), &CellValue::from("inprogress"));
    }

    #[test]
    fn test_advance_unknown_task() {
        let mut data = OfficeData::demo();
        assert_eq!(data.advance_task("task-99"), None);
    }

    #[test]
    fn test_moved_task_keeps_search_and_sort() {
        let mut data = OfficeData::demo();
        let user = User::demo_office();
        let mut table = data.table(Dataset::Tasks, &user, &Settings::default());
        table.set_search("inprogress");
        table.toggle_sort("title");
        assert_eq!(table.filtered_count(), 2);

        data.advance_task("task-1");
        table.set_records(data.records(Dataset::Tasks, &user));
        assert_eq!(table.search(), "inprogress");
        assert_eq!(table.sort().map(|s| s.key.as_str()), Some("title"));
        assert_eq!(table.filtered_count(), 3);
        assert_eq!(table.current_page(), 1);
    }
}
