//! Property tests for the payout aggregation invariants.

use payout_report::{generate_payout_report, EmployeeRecord, Money};
use proptest::prelude::*;

fn employee_strategy() -> impl Strategy<Value = EmployeeRecord> {
    (
        any::<i64>(),
        prop::sample::select(vec!["Engineering", "Sales", "HR", "hr", "Design"]),
        "[A-Za-z ]{1,12}",
        0..=400i32,
        0..=500i32,
    )
        .prop_map(|(id, department, name, hours_worked, hourly_rate)| EmployeeRecord {
            id,
            email: format!("{}@example.com", id),
            name,
            department: department.to_string(),
            hours_worked,
            hourly_rate,
        })
}

proptest! {
    #[test]
    fn payout_is_hours_times_rate(employees in prop::collection::vec(employee_strategy(), 0..50)) {
        let report = generate_payout_report(&employees);
        for dept in report.departments() {
            for entry in &dept.employees {
                let expected = i64::from(entry.hours_worked) * i64::from(entry.hourly_rate);
                prop_assert_eq!(entry.payout, Money::new(expected));
            }
        }
    }

    #[test]
    fn department_totals_match_employee_sums(employees in prop::collection::vec(employee_strategy(), 0..50)) {
        let report = generate_payout_report(&employees);
        for dept in report.departments() {
            let hours: i64 = dept.employees.iter().map(|e| i64::from(e.hours_worked)).sum();
            let payout: Money = dept.employees.iter().map(|e| e.payout).sum();
            prop_assert_eq!(dept.total_hours, hours);
            prop_assert_eq!(dept.total_payout, payout);
        }
    }

    #[test]
    fn every_record_lands_in_its_department_in_order(employees in prop::collection::vec(employee_strategy(), 0..50)) {
        let report = generate_payout_report(&employees);

        let total: usize = report.departments().map(|d| d.employees.len()).sum();
        prop_assert_eq!(total, employees.len());

        for dept in report.departments() {
            let expected: Vec<_> = employees
                .iter()
                .filter(|e| e.department == dept.department)
                .map(|e| e.name.as_str())
                .collect();
            let actual: Vec<_> = dept.employees.iter().map(|e| e.name.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn departments_follow_first_encounter_order(employees in prop::collection::vec(employee_strategy(), 0..50)) {
        let report = generate_payout_report(&employees);

        let mut expected: Vec<&str> = Vec::new();
        for e in &employees {
            if !expected.contains(&e.department.as_str()) {
                expected.push(&e.department);
            }
        }
        let actual: Vec<_> = report.departments().map(|d| d.department.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }
}
