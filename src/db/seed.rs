// src/db/seed.rs

// Dados de demonstração usados como fallback quando a carga inicial de uma
// coleção falha. Mesmo catálogo de exemplo do frontend: a tela nunca abre vazia.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    agenda::{Appointment, AppointmentStatus},
    finance::Expense,
    inventory::InventoryItem,
    orders::{Part, ServiceOrder, ServiceStatus},
    vehicles::VehicleRef,
};

fn part(order_id: Uuid, name: &str, price: i64, quantity: i32) -> Part {
    Part {
        id: Uuid::new_v4(),
        service_order_id: order_id,
        name: name.to_string(),
        price: Decimal::from(price),
        quantity,
        inventory_item_id: None,
    }
}

fn vehicle(model: &str, year: &str, plate: &str) -> VehicleRef {
    VehicleRef {
        model: model.to_string(),
        year: year.to_string(),
        plate: plate.to_string(),
    }
}

pub fn service_orders() -> Vec<ServiceOrder> {
    let now = Utc::now();
    let yesterday = now - Duration::days(1);

    let id1 = Uuid::new_v4();
    let id2 = Uuid::new_v4();
    let id3 = Uuid::new_v4();

    vec![
        ServiceOrder {
            id: id1,
            client_name: "João Silva".to_string(),
            vehicle: vehicle("Fiat Uno", "2018", "ABC-1234"),
            service_type: "Troca de óleo e filtros".to_string(),
            parts: vec![
                part(id1, "Óleo 5W30", 35, 4),
                part(id1, "Filtro de óleo", 25, 1),
                part(id1, "Filtro de ar", 45, 1),
            ],
            labor_cost: Decimal::from(80),
            total: Decimal::from(290),
            status: ServiceStatus::EmAndamento,
            created_at: now,
            updated_at: now,
            completed_at: None,
        },
        ServiceOrder {
            id: id2,
            client_name: "Maria Oliveira".to_string(),
            vehicle: vehicle("Honda Fit", "2020", "DEF-5678"),
            service_type: "Revisão completa".to_string(),
            parts: vec![
                part(id2, "Óleo 5W30", 35, 4),
                part(id2, "Filtro de óleo", 30, 1),
                part(id2, "Filtro de ar", 50, 1),
                part(id2, "Filtro de combustível", 80, 1),
                part(id2, "Filtro de ar condicionado", 60, 1),
            ],
            labor_cost: Decimal::from(150),
            total: Decimal::from(460),
            status: ServiceStatus::Concluido,
            created_at: now - Duration::days(2),
            updated_at: yesterday,
            completed_at: Some(yesterday),
        },
        ServiceOrder {
            id: id3,
            client_name: "Carlos Pereira".to_string(),
            vehicle: vehicle("VW Golf", "2019", "GHI-9012"),
            service_type: "Troca de pastilhas de freio".to_string(),
            parts: vec![
                part(id3, "Jogo de pastilhas dianteiras", 180, 1),
                part(id3, "Fluido de freio DOT4", 40, 1),
            ],
            labor_cost: Decimal::from(120),
            total: Decimal::from(340),
            status: ServiceStatus::EmAndamento,
            created_at: now,
            updated_at: now,
            completed_at: None,
        },
        ServiceOrder {
            id: Uuid::new_v4(),
            client_name: "Ana Santos".to_string(),
            vehicle: vehicle("Toyota Corolla", "2021", "JKL-3456"),
            service_type: "Alinhamento e balanceamento".to_string(),
            parts: vec![],
            labor_cost: Decimal::from(150),
            total: Decimal::from(150),
            status: ServiceStatus::Rascunho,
            created_at: yesterday,
            updated_at: yesterday,
            completed_at: None,
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    let now = Utc::now();

    vec![
        Appointment {
            id: Uuid::new_v4(),
            client_name: "Roberto Campos".to_string(),
            vehicle: vehicle("Hyundai HB20", "2020", "MNO-7890"),
            service_type: "Troca de óleo".to_string(),
            date: (now + Duration::days(1)).date_naive(),
            time: "09:30".to_string(),
            notes: Some("Cliente solicitou uso de óleo sintético".to_string()),
            status: AppointmentStatus::Agendado,
            created_at: now,
        },
        Appointment {
            id: Uuid::new_v4(),
            client_name: "Fernanda Lima".to_string(),
            vehicle: vehicle("Jeep Renegade", "2019", "PQR-1234"),
            service_type: "Revisão de 40.000km".to_string(),
            date: (now + Duration::days(2)).date_naive(),
            time: "14:00".to_string(),
            notes: None,
            status: AppointmentStatus::Agendado,
            created_at: now,
        },
        Appointment {
            id: Uuid::new_v4(),
            client_name: "Lucas Mendes".to_string(),
            vehicle: vehicle("Nissan Kicks", "2021", "STU-5678"),
            service_type: "Reparo no ar condicionado".to_string(),
            date: (now + Duration::days(2)).date_naive(),
            time: "16:30".to_string(),
            notes: None,
            status: AppointmentStatus::Agendado,
            created_at: now,
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    let item = |name: &str, purchase: i64, selling: i64, stock: i32, min_stock: i32| {
        InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            purchase_price: Decimal::from(purchase),
            selling_price: Decimal::from(selling),
            stock,
            min_stock,
        }
    };

    vec![
        item("Óleo 5W30 (1L)", 25, 35, 20, 5),
        item("Filtro de óleo universal", 18, 30, 15, 5),
        item("Filtro de ar universal", 35, 55, 10, 4),
        item("Pastilhas de freio dianteiras", 120, 180, 6, 2),
        item("Fluido de freio DOT4 (500ml)", 30, 45, 8, 3),
    ]
}

pub fn expenses() -> Vec<Expense> {
    let now = Utc::now();
    let expense = |description: &str, amount: i64, days_ago: i64, category: &str| Expense {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount: Decimal::from(amount),
        date: (now - Duration::days(days_ago)).date_naive(),
        category: category.to_string(),
        created_at: now - Duration::days(days_ago),
    };

    vec![
        expense("Compra de ferramentas", 450, 10, "Equipamentos"),
        expense("Reposição de estoque", 1200, 5, "Peças"),
        expense("Conta de energia", 380, 2, "Utilidades"),
    ]
}
