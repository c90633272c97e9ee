//! # Mock Data Generator
//!
//! Produces the five in-memory portfolio tables by sampling fixed category
//! sets and numeric ranges. Generation is infallible and takes an injected
//! random source so seeded runs are reproducible. Foreign-key-like fields
//! (`property_id`, `tenant_id`, `facility_id`) are sampled independently of
//! the tables they nominally point at and may dangle; views tolerate that.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::MockDataConfig;
use crate::models::{
    Expense, ExpenseCategory, ExpenseStatus, MaintenanceTask, Payment, PaymentMethod,
    PaymentStatus, Property, PropertyStatus, PropertyType, TaskCategory, TaskPriority, TaskStatus,
    Tenant,
};

/// The five session tables, generated once and shared read-only.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub properties: Vec<Property>,
    pub tenants: Vec<Tenant>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub tasks: Vec<MaintenanceTask>,
    /// The "now" the date-valued fields were sampled relative to.
    pub generated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Distinct property types in first-observed order.
    pub fn observed_property_types(&self) -> Vec<PropertyType> {
        let mut seen = Vec::new();
        for property in &self.properties {
            if !seen.contains(&property.kind) {
                seen.push(property.kind);
            }
        }
        seen
    }

    /// Distinct property statuses in first-observed order.
    pub fn observed_property_statuses(&self) -> Vec<PropertyStatus> {
        let mut seen = Vec::new();
        for property in &self.properties {
            if !seen.contains(&property.status) {
                seen.push(property.status);
            }
        }
        seen
    }
}

/// Generate a fresh portfolio relative to `now`.
///
/// Each call yields a new independent sample; the host caches the result so a
/// single portfolio backs every view for the life of the session.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    config: &MockDataConfig,
) -> Portfolio {
    let rows = config.rows_per_table;
    Portfolio {
        properties: generate_properties(rng, rows),
        tenants: generate_tenants(rng, now, rows),
        payments: generate_payments(rng, now, rows),
        expenses: generate_expenses(rng, now, rows),
        tasks: generate_tasks(rng, now, rows),
        generated_at: now,
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, set: &[T]) -> T {
    set[rng.gen_range(0..set.len())]
}

fn generate_properties<R: Rng + ?Sized>(rng: &mut R, rows: usize) -> Vec<Property> {
    (1..=rows as i64)
        .map(|i| Property {
            id: i,
            name: format!("Property {i}"),
            address: format!("{} Main St, City {i}", 99 + i),
            kind: pick(rng, PropertyType::ALL),
            status: pick(rng, PropertyStatus::ALL),
            size_sqft: rng.gen_range(800..5000),
            year_built: rng.gen_range(1980..2023),
            value: rng.gen_range(200_000..2_000_000),
        })
        .collect()
}

fn generate_tenants<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, rows: usize) -> Vec<Tenant> {
    (1..=rows as i64)
        .map(|i| {
            let lease_start = now - Duration::days(rng.gen_range(30..365));
            let lease_end = lease_start + Duration::days(rng.gen_range(180..730));
            Tenant {
                id: i,
                user_id: i + 9,
                facility_id: rng.gen_range(1..6),
                lease_start,
                lease_end,
                rent_amount: rng.gen_range(800..3000),
                name: format!("Tenant {i}"),
            }
        })
        .collect()
}

fn generate_payments<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    rows: usize,
) -> Vec<Payment> {
    (1..=rows as i64)
        .map(|i| Payment {
            id: i,
            user_id: rng.gen_range(1..6),
            tenant_id: rng.gen_range(1..6),
            property_id: rng.gen_range(1..6),
            amount: rng.gen_range(800..3000),
            currency: "USD".to_string(),
            payment_date: now - Duration::days(rng.gen_range(1..90)),
            method: pick(rng, PaymentMethod::ALL),
            status: pick(rng, PaymentStatus::ALL),
        })
        .collect()
}

fn generate_expenses<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    rows: usize,
) -> Vec<Expense> {
    (1..=rows as i64)
        .map(|i| Expense {
            id: i,
            user_id: rng.gen_range(1..6),
            property_id: rng.gen_range(1..6),
            amount: rng.gen_range(100..2000),
            currency: "USD".to_string(),
            category: pick(rng, ExpenseCategory::ALL),
            status: pick(rng, ExpenseStatus::ALL),
            expense_date: now - Duration::days(rng.gen_range(1..90)),
            description: format!("Expense {i} description"),
        })
        .collect()
}

fn generate_tasks<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    rows: usize,
) -> Vec<MaintenanceTask> {
    (1..=rows as i64)
        .map(|i| MaintenanceTask {
            id: i,
            user_id: rng.gen_range(1..6),
            property_id: rng.gen_range(1..6),
            title: format!("Task {i}"),
            description: format!("Description for task {i}"),
            due_date: now + Duration::days(rng.gen_range(1..30)),
            status: pick(rng, TaskStatus::ALL),
            category: pick(rng, TaskCategory::ALL),
            priority: pick(rng, TaskPriority::ALL),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn sample(seed: u64, rows: usize) -> Portfolio {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = MockDataConfig {
            rows_per_table: rows,
        };
        generate(&mut rng, Utc::now(), &config)
    }

    #[test]
    fn every_table_has_exactly_the_configured_row_count() {
        let portfolio = sample(7, 5);
        assert_eq!(portfolio.properties.len(), 5);
        assert_eq!(portfolio.tenants.len(), 5);
        assert_eq!(portfolio.payments.len(), 5);
        assert_eq!(portfolio.expenses.len(), 5);
        assert_eq!(portfolio.tasks.len(), 5);
    }

    #[test]
    fn ids_are_dense_from_one() {
        let portfolio = sample(7, 5);
        let ids: Vec<i64> = portfolio.properties.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let ids: Vec<i64> = portfolio.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn enumerated_fields_stay_inside_their_category_sets() {
        let portfolio = sample(11, 50);
        for property in &portfolio.properties {
            assert!(PropertyType::ALL.contains(&property.kind));
            assert!(PropertyStatus::ALL.contains(&property.status));
        }
        for payment in &portfolio.payments {
            assert!(PaymentMethod::ALL.contains(&payment.method));
            assert!(PaymentStatus::ALL.contains(&payment.status));
            assert_eq!(payment.currency, "USD");
        }
        for expense in &portfolio.expenses {
            assert!(ExpenseCategory::ALL.contains(&expense.category));
            assert!(ExpenseStatus::ALL.contains(&expense.status));
        }
        for task in &portfolio.tasks {
            assert!(TaskStatus::ALL.contains(&task.status));
            assert!(TaskCategory::ALL.contains(&task.category));
            assert!(TaskPriority::ALL.contains(&task.priority));
        }
    }

    #[test]
    fn numeric_ranges_match_the_generator_contract() {
        let portfolio = sample(13, 50);
        for property in &portfolio.properties {
            assert!((800..5000).contains(&property.size_sqft));
            assert!((1980..2023).contains(&property.year_built));
            assert!((200_000..2_000_000).contains(&property.value));
        }
        for tenant in &portfolio.tenants {
            assert!(tenant.lease_end > tenant.lease_start);
            assert!((800..3000).contains(&tenant.rent_amount));
        }
    }

    #[test]
    fn task_due_dates_are_future_biased() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(17);
        let portfolio = generate(&mut rng, now, &MockDataConfig { rows_per_table: 20 });
        for task in &portfolio.tasks {
            assert!(task.due_date > now);
            assert!(task.due_date <= now + Duration::days(30));
        }
    }

    #[test]
    fn payment_dates_fall_inside_the_trailing_window() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(19);
        let portfolio = generate(&mut rng, now, &MockDataConfig { rows_per_table: 20 });
        for payment in &portfolio.payments {
            assert!(payment.payment_date < now);
            assert!(payment.payment_date >= now - Duration::days(90));
        }
        for expense in &portfolio.expenses {
            assert!(expense.expense_date < now);
            assert!(expense.expense_date >= now - Duration::days(90));
        }
    }

    #[test]
    fn same_seed_yields_identical_portfolio() {
        let now = Utc::now();
        let config = MockDataConfig { rows_per_table: 5 };
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = generate(&mut a, now, &config);
        let second = generate(&mut b, now, &config);
        assert_eq!(first.properties, second.properties);
        assert_eq!(first.tenants, second.tenants);
        assert_eq!(first.payments, second.payments);
        assert_eq!(first.expenses, second.expenses);
        assert_eq!(first.tasks, second.tasks);
    }

    #[test]
    fn observed_sets_preserve_first_occurrence_order() {
        let portfolio = Portfolio {
            properties: vec![
                Property {
                    id: 1,
                    name: "Property 1".into(),
                    address: "100 Main St, City 1".into(),
                    kind: PropertyType::Land,
                    status: PropertyStatus::Active,
                    size_sqft: 1000,
                    year_built: 2000,
                    value: 500_000,
                },
                Property {
                    id: 2,
                    name: "Property 2".into(),
                    address: "101 Main St, City 2".into(),
                    kind: PropertyType::Residential,
                    status: PropertyStatus::Active,
                    size_sqft: 1200,
                    year_built: 2005,
                    value: 700_000,
                },
                Property {
                    id: 3,
                    name: "Property 3".into(),
                    address: "102 Main St, City 3".into(),
                    kind: PropertyType::Land,
                    status: PropertyStatus::Inactive,
                    size_sqft: 900,
                    year_built: 1999,
                    value: 400_000,
                },
            ],
            tenants: vec![],
            payments: vec![],
            expenses: vec![],
            tasks: vec![],
            generated_at: Utc::now(),
        };

        assert_eq!(
            portfolio.observed_property_types(),
            vec![PropertyType::Land, PropertyType::Residential]
        );
        assert_eq!(
            portfolio.observed_property_statuses(),
            vec![PropertyStatus::Active, PropertyStatus::Inactive]
        );
    }
}
