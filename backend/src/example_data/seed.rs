//! The fixed sample employees.

use crate::domain::{EmployeeDetails, EmployeeValidationError};

/// `(name, email, department, age, salary)` for each sample employee.
pub const SAMPLE_EMPLOYEES: [(&str, &str, &str, i32, i64); 6] = [
    ("Андрей", "rfjbebv@prisma.io", "Разработка", 30, 50_000),
    ("Никита", "jh2be2u@prisma.io", "Дизайн", 32, 60_000),
    ("Владимир", "jbu3uff@prisma.io", "Маркетинг", 20, 40_000),
    ("Примат", "ejkfb2u@prisma.io", "Клининг", 18, 300_000),
    ("Арсений", "enjf2u@prisma.io", "СЕО", 17, 70_000),
    ("Гусеница", "ejubf2ui@prisma.io", "Отдел продаж", 90, 100_000),
];

/// Validated details for the sample employees, in seeding order.
pub fn sample_employees() -> Result<Vec<EmployeeDetails>, EmployeeValidationError> {
    SAMPLE_EMPLOYEES
        .iter()
        .map(|&(name, email, department, age, salary)| {
            EmployeeDetails::new(name, email, age, department, salary)
        })
        .collect()
}
