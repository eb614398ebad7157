//! Bundled demo data.

use chrono::NaiveDate;

use super::types::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Client companies.
pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "client-1".to_string(),
            name: "Empresa ABC Ltda".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            email: "contato@empresaabc.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
            plan: Plan::Pro,
            status: ClientStatus::Active,
            last_payment: Some(date(2024, 8, 15)),
            next_due_date: Some(date(2024, 9, 15)),
            monthly_recurrence: true,
            address: Some(Address {
                street: "Rua das Flores, 123".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                zip_code: "01234-567".to_string(),
            }),
        },
        Client {
            id: "client-2".to_string(),
            name: "Tech Solutions S.A.".to_string(),
            cnpj: "98.765.432/0001-10".to_string(),
            email: "financeiro@techsolutions.com".to_string(),
            phone: "(11) 91234-5678".to_string(),
            plan: Plan::Enterprise,
            status: ClientStatus::Active,
            last_payment: Some(date(2024, 8, 20)),
            next_due_date: Some(date(2024, 9, 20)),
            monthly_recurrence: true,
            address: None,
        },
        Client {
            id: "client-3".to_string(),
            name: "Comércio XYZ ME".to_string(),
            cnpj: "11.222.333/0001-44".to_string(),
            email: "admin@comercioxyz.com".to_string(),
            phone: "(11) 95555-1234".to_string(),
            plan: Plan::Basic,
            status: ClientStatus::Pending,
            last_payment: None,
            next_due_date: Some(date(2024, 9, 10)),
            monthly_recurrence: false,
            address: None,
        },
        Client {
            id: "client-4".to_string(),
            name: "Indústria Nova Era".to_string(),
            cnpj: "55.444.333/0001-22".to_string(),
            email: "contabil@novaera.com".to_string(),
            phone: "(11) 94444-9999".to_string(),
            plan: Plan::Pro,
            status: ClientStatus::Active,
            last_payment: Some(date(2024, 8, 12)),
            next_due_date: Some(date(2024, 9, 12)),
            monthly_recurrence: true,
            address: None,
        },
        Client {
            id: "client-5".to_string(),
            name: "Serviços Premium Ltd".to_string(),
            cnpj: "77.888.999/0001-55".to_string(),
            email: "financas@premium.com".to_string(),
            phone: "(21) 97777-8888".to_string(),
            plan: Plan::Enterprise,
            status: ClientStatus::Inactive,
            last_payment: Some(date(2024, 7, 30)),
            next_due_date: None,
            monthly_recurrence: false,
            address: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn payment(
    id: &str,
    client_id: &str,
    amount: f64,
    method: PaymentMethod,
    status: PaymentStatus,
    date: NaiveDate,
    due_date: NaiveDate,
    description: &str,
) -> Payment {
    Payment {
        id: id.to_string(),
        client_id: client_id.to_string(),
        amount,
        method,
        status,
        date,
        due_date,
        description: description.to_string(),
    }
}

/// Billed monthly fees, including the previous two months of history.
pub fn payments() -> Vec<Payment> {
    use PaymentMethod::*;
    use PaymentStatus::*;

    vec![
        payment("pay-1", "client-1", 1200.0, Pix, Paid, date(2024, 8, 15), date(2024, 8, 15), "Mensalidade Plano Pro - Agosto/2024"),
        payment("pay-2", "client-2", 2500.0, CreditCard, Paid, date(2024, 8, 20), date(2024, 8, 20), "Mensalidade Plano Enterprise - Agosto/2024"),
        payment("pay-3", "client-3", 800.0, BankTransfer, Pending, date(2024, 9, 10), date(2024, 9, 10), "Mensalidade Plano Basic - Setembro/2024"),
        payment("pay-4", "client-4", 1200.0, Pix, Overdue, date(2024, 9, 12), date(2024, 9, 5), "Mensalidade Plano Pro - Setembro/2024"),
        payment("pay-5", "client-1", 1200.0, Pix, Pending, date(2024, 9, 15), date(2024, 9, 15), "Mensalidade Plano Pro - Setembro/2024"),
        payment("pay-6", "client-1", 1200.0, Pix, Paid, date(2024, 7, 15), date(2024, 7, 15), "Mensalidade Plano Pro - Julho/2024"),
        payment("pay-7", "client-2", 2500.0, CreditCard, Paid, date(2024, 7, 20), date(2024, 7, 20), "Mensalidade Plano Enterprise - Julho/2024"),
        payment("pay-8", "client-4", 1200.0, Pix, Paid, date(2024, 7, 12), date(2024, 7, 12), "Mensalidade Plano Pro - Julho/2024"),
        payment("pay-9", "client-5", 2500.0, BankTransfer, Paid, date(2024, 7, 30), date(2024, 7, 28), "Mensalidade Plano Enterprise - Julho/2024"),
        payment("pay-10", "client-1", 1200.0, Pix, Paid, date(2024, 6, 14), date(2024, 6, 15), "Mensalidade Plano Pro - Junho/2024"),
        payment("pay-11", "client-2", 2500.0, CreditCard, Paid, date(2024, 6, 20), date(2024, 6, 20), "Mensalidade Plano Enterprise - Junho/2024"),
        payment("pay-12", "client-4", 1200.0, Pix, Paid, date(2024, 6, 12), date(2024, 6, 12), "Mensalidade Plano Pro - Junho/2024"),
        payment("pay-13", "client-5", 2500.0, BankTransfer, Paid, date(2024, 6, 30), date(2024, 6, 28), "Mensalidade Plano Enterprise - Junho/2024"),
    ]
}

/// Employees on client payrolls.
pub fn employees() -> Vec<Employee> {
    let employee = |id: &str, client_id: &str, name: &str, position: &str, salary: f64, benefits: &[&str]| Employee {
        id: id.to_string(),
        client_id: client_id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
        salary,
        benefits: strings(benefits),
        inss: true,
        fgts: true,
        status: EmployeeStatus::Active,
    };

    vec![
        employee("emp-1", "client-1", "João Silva", "Desenvolvedor", 5000.0, &["Vale Transporte", "Vale Refeição"]),
        employee("emp-2", "client-1", "Maria Santos", "Gerente", 8000.0, &["Vale Transporte", "Vale Refeição", "Plano de Saúde"]),
        employee("emp-3", "client-2", "Pedro Oliveira", "Analista", 4500.0, &["Vale Transporte"]),
        employee("emp-4", "client-2", "Ana Costa", "Coordenadora", 6500.0, &["Vale Transporte", "Vale Refeição", "Plano de Saúde"]),
    ]
}

/// Office tasks.
pub fn tasks() -> Vec<Task> {
    let assignee = "Admin Contabilidade".to_string();
    vec![
        Task {
            id: "task-1".to_string(),
            title: "Processar folha de pagamento - Empresa ABC".to_string(),
            description: "Calcular e gerar folha de pagamento do mês de setembro".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            assigned_to: assignee.clone(),
            client_id: Some("client-1".to_string()),
            due_date: Some(date(2024, 9, 25)),
            created_at: date(2024, 9, 1),
            updated_at: date(2024, 9, 1),
            comments: Vec::new(),
            attachments: Vec::new(),
        },
        Task {
            id: "task-2".to_string(),
            title: "Calcular DAS - Tech Solutions".to_string(),
            description: "Calcular valor do DAS baseado no faturamento de agosto".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            assigned_to: assignee.clone(),
            client_id: Some("client-2".to_string()),
            due_date: Some(date(2024, 9, 20)),
            created_at: date(2024, 8, 30),
            updated_at: date(2024, 9, 2),
            comments: vec![TaskComment {
                user_name: assignee.clone(),
                content: "Aguardando envio das notas fiscais do cliente".to_string(),
                created_at: date(2024, 9, 2),
            }],
            attachments: Vec::new(),
        },
        Task {
            id: "task-3".to_string(),
            title: "Enviar relatório mensal".to_string(),
            description: "Preparar e enviar relatório contábil mensal para todos os clientes"
                .to_string(),
            status: TaskStatus::Done,
            priority: TaskPriority::Medium,
            assigned_to: assignee.clone(),
            client_id: None,
            due_date: Some(date(2024, 8, 31)),
            created_at: date(2024, 8, 15),
            updated_at: date(2024, 8, 30),
            comments: Vec::new(),
            attachments: Vec::new(),
        },
        Task {
            id: "task-4".to_string(),
            title: "Configurar integração SEFAZ".to_string(),
            description: "Configurar certificado digital para integração com SEFAZ".to_string(),
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            assigned_to: assignee.clone(),
            client_id: None,
            due_date: Some(date(2024, 9, 30)),
            created_at: date(2024, 9, 3),
            updated_at: date(2024, 9, 3),
            comments: Vec::new(),
            attachments: Vec::new(),
        },
        Task {
            id: "task-5".to_string(),
            title: "Revisar documentos fiscais - Comércio XYZ".to_string(),
            description: "Revisar e validar documentos fiscais enviados pelo cliente".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Low,
            assigned_to: assignee,
            client_id: Some("client-3".to_string()),
            due_date: Some(date(2024, 9, 18)),
            created_at: date(2024, 9, 1),
            updated_at: date(2024, 9, 4),
            comments: Vec::new(),
            attachments: strings(&["notas_fiscais_agosto.pdf"]),
        },
    ]
}

/// Documents in the digital archive.
pub fn documents() -> Vec<Document> {
    let document = |id: &str,
                    client_id: &str,
                    doc_type: DocumentType,
                    name: &str,
                    file_url: &str,
                    uploaded_at: NaiveDate,
                    status: DocumentStatus,
                    tags: &[&str]| Document {
        id: id.to_string(),
        client_id: client_id.to_string(),
        doc_type,
        name: name.to_string(),
        file_url: file_url.to_string(),
        uploaded_at,
        status,
        tags: strings(tags),
    };

    vec![
        document("doc-1", "client-1", DocumentType::Nfe, "Nota Fiscal 001 - Agosto 2024", "/documents/nfe-001.pdf", date(2024, 8, 15), DocumentStatus::Processed, &["agosto", "nfe", "vendas"]),
        document("doc-2", "client-1", DocumentType::Contract, "Contrato Social Atualizado", "/documents/contrato-social.pdf", date(2024, 7, 20), DocumentStatus::Processed, &["contrato", "juridico"]),
        document("doc-3", "client-2", DocumentType::Certificate, "Certificado Digital A1", "/documents/certificado-a1.p12", date(2024, 8, 1), DocumentStatus::Processed, &["certificado", "digital"]),
        document("doc-4", "client-2", DocumentType::Report, "Balancete Agosto 2024", "/documents/balancete-agosto.pdf", date(2024, 8, 31), DocumentStatus::Sent, &["balancete", "agosto", "contabil"]),
    ]
}
