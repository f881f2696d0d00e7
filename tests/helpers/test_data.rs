//! Demo dataset served by the fake HR backend
//!
//! Two seed sets coexist on the deployed service: the assertion suite logs in
//! with `anil.lalwani@` / `admin@` / `eshwar.p@`, the tally tester with
//! `director@` / `john.doe@`. The fake backend accepts both.

use hr_api_probe::models::Credentials;
use serde_json::{json, Value};

pub const DEMO_PASSWORD: &str = "demo123";

pub const SUITE_DIRECTOR_EMAIL: &str = "anil.lalwani@dllc.com";
pub const SUITE_ADMIN_EMAIL: &str = "admin@dllc.com";
pub const SUITE_EMPLOYEE_EMAIL: &str = "eshwar.p@dllc.com";

/// A demo login the fake backend recognizes
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub id: u64,
    pub email: &'static str,
    pub role: &'static str,
    pub full_name: &'static str,
    pub token: &'static str,
}

pub const DIRECTOR: DemoAccount = DemoAccount {
    id: 1,
    email: "director@dllc.com",
    role: "Director",
    full_name: "Anil Lalwani",
    token: "tok-director",
};

pub const SUITE_DIRECTOR: DemoAccount = DemoAccount {
    id: 1,
    email: SUITE_DIRECTOR_EMAIL,
    role: "Director",
    full_name: "Anil Lalwani",
    token: "tok-anil",
};

pub const ADMIN: DemoAccount = DemoAccount {
    id: 2,
    email: SUITE_ADMIN_EMAIL,
    role: "Admin",
    full_name: "System Admin",
    token: "tok-admin",
};

pub const EMPLOYEE: DemoAccount = DemoAccount {
    id: 5,
    email: "john.doe@dllc.com",
    role: "Employee",
    full_name: "John Doe",
    token: "tok-john",
};

pub const SUITE_EMPLOYEE: DemoAccount = DemoAccount {
    id: 7,
    email: SUITE_EMPLOYEE_EMAIL,
    role: "Employee",
    full_name: "Eshwar P",
    token: "tok-eshwar",
};

pub const ALL_ACCOUNTS: [DemoAccount; 5] = [DIRECTOR, SUITE_DIRECTOR, ADMIN, EMPLOYEE, SUITE_EMPLOYEE];

impl DemoAccount {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email, DEMO_PASSWORD)
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self.role, "Director" | "Admin" | "HR")
    }

    pub fn profile(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "role": self.role,
            "full_name": self.full_name,
            "employee_id": format!("DLLC{:03}", self.id)
        })
    }

    pub fn login_body(&self) -> Value {
        json!({
            "token": self.token,
            "user": self.profile()
        })
    }
}

/// Ten employee records; the last one is inactive
pub fn employees() -> Vec<Value> {
    let names = [
        "Anil Lalwani",
        "System Admin",
        "Priya Sharma",
        "Rahul Mehta",
        "John Doe",
        "Sneha Iyer",
        "Eshwar P",
        "Kavya Nair",
        "Arjun Rao",
        "Meera Pillai",
    ];

    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = i + 1;
            let email = format!("{}@dllc.com", name.to_lowercase().replace(' ', "."));
            json!({
                "id": id,
                "employee_id": format!("DLLC{:03}", id),
                "full_name": name,
                "email": email,
                "status": if id == 10 { "Inactive" } else { "Active" },
                "department": "Operations"
            })
        })
        .collect()
}

pub fn active_employees() -> Vec<Value> {
    employees()
        .into_iter()
        .filter(|e| e["status"] == "Active")
        .collect()
}

/// The single record an employee may see about themselves
pub fn own_employee_record(account: &DemoAccount) -> Value {
    json!([{
        "id": account.id,
        "employee_id": format!("DLLC{:03}", account.id),
        "full_name": account.full_name,
        "email": account.email,
        "status": "Active"
    }])
}

pub fn demo_users() -> Value {
    let users: Vec<Value> = employees()
        .iter()
        .map(|e| json!({"email": e["email"], "full_name": e["full_name"], "password": DEMO_PASSWORD}))
        .collect();
    json!({ "demo_users": users })
}

pub fn attendance_page() -> Value {
    json!({
        "data": [
            {"id": 1, "employee_id": 5, "date": "2024-12-02", "check_in": "09:02", "check_out": "18:10"},
            {"id": 2, "employee_id": 7, "date": "2024-12-02", "check_in": "09:15", "check_out": null}
        ],
        "pagination": {"page": 1, "limit": 50, "total": 2}
    })
}

pub fn leave_page() -> Value {
    json!({
        "data": [
            {"id": 3, "employee_id": 5, "leave_type": "Annual", "status": "Pending"}
        ],
        "pagination": {"page": 1, "limit": 50, "total": 1}
    })
}

pub fn own_leaves() -> Value {
    json!([
        {"id": 3, "leave_type": "Annual", "start_date": "2024-12-25", "end_date": "2024-12-26", "status": "Pending"}
    ])
}

pub fn documents() -> Value {
    json!([
        {"id": 1, "title": "Offer Letter", "document_type": "Contract"},
        {"id": 2, "title": "PAN Card", "document_type": "Identity"}
    ])
}

pub fn salary_records() -> Value {
    json!([
        {"id": 1, "employee_id": 5, "month": 11, "year": 2024, "net_salary": "55000.00", "status": "Paid"}
    ])
}

pub fn announcements() -> Value {
    json!([
        {"id": 1, "title": "Office closed on Christmas", "priority": "High"}
    ])
}

pub fn tickets() -> Value {
    json!([
        {"id": 1, "subject": "Laptop not booting", "status": "Open"}
    ])
}
