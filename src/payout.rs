//! Payout report: employees grouped by department with hour and pay totals.
//!
//! Maintains the invariants `total_hours == Σ hours_worked` and
//! `total_payout == Σ payout` for every department at all times.

use crate::employee::EmployeeRecord;
use crate::money::Money;
use std::collections::HashMap;

/// One employee's line in a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePayout {
    pub name: String,
    pub hours_worked: i32,
    pub hourly_rate: i32,
    /// `hours_worked × hourly_rate`
    pub payout: Money,
}

impl EmployeePayout {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        EmployeePayout {
            name: record.name.clone(),
            hours_worked: record.hours_worked,
            hourly_rate: record.hourly_rate,
            payout: Money::payout(record.hours_worked, record.hourly_rate),
        }
    }
}

/// All employees sharing a department value, with running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentAggregate {
    pub department: String,

    /// Employees in first-seen input order.
    pub employees: Vec<EmployeePayout>,

    pub total_hours: i64,

    pub total_payout: Money,
}

impl DepartmentAggregate {
    pub fn new(department: impl Into<String>) -> Self {
        DepartmentAggregate {
            department: department.into(),
            employees: Vec::new(),
            total_hours: 0,
            total_payout: Money::ZERO,
        }
    }

    /// Appends an employee and folds it into the totals.
    pub fn push(&mut self, entry: EmployeePayout) {
        self.total_hours += i64::from(entry.hours_worked);
        self.total_payout += entry.payout;
        self.employees.push(entry);
    }

    /// Verifies both totals against the employee lines.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        let hours: i64 = self.employees.iter().map(|e| i64::from(e.hours_worked)).sum();
        let payout: Money = self.employees.iter().map(|e| e.payout).sum();
        self.total_hours == hours && self.total_payout == payout
    }
}

/// Department aggregates in first-encounter order.
///
/// Lookup is by exact department string; `"HR"` and `"hr"` are distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutReport {
    departments: Vec<DepartmentAggregate>,
    index: HashMap<String, usize>,
}

impl PayoutReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to its department, creating the department on first
    /// encounter.
    pub fn add(&mut self, record: &EmployeeRecord) {
        let slot = match self.index.get(&record.department) {
            Some(&slot) => slot,
            None => {
                let slot = self.departments.len();
                self.departments
                    .push(DepartmentAggregate::new(record.department.as_str()));
                self.index.insert(record.department.clone(), slot);
                slot
            }
        };

        self.departments[slot].push(EmployeePayout::from_record(record));
    }

    pub fn get(&self, department: &str) -> Option<&DepartmentAggregate> {
        self.index.get(department).map(|&slot| &self.departments[slot])
    }

    /// Iterates departments in first-encounter order.
    pub fn departments(&self) -> impl Iterator<Item = &DepartmentAggregate> {
        self.departments.iter()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn grand_total_hours(&self) -> i64 {
        self.departments.iter().map(|d| d.total_hours).sum()
    }

    pub fn grand_total_payout(&self) -> Money {
        self.departments.iter().map(|d| d.total_payout).sum()
    }
}

/// Groups records by department and totals hours and payouts in one pass.
pub fn generate_payout_report(employees: &[EmployeeRecord]) -> PayoutReport {
    let mut report = PayoutReport::new();
    for employee in employees {
        report.add(employee);
    }
    report
}
