// Re-export the shared crate's data models.
#[cfg_attr(not(feature = "mock"), allow(unused_imports, reason = "mock-only"))]
pub use tk_expedited_shared::{Carrier, User, UserInfo};

// =============== Mock data ===============

/// An admin session so the dashboard is reachable in demo builds.
#[cfg(feature = "mock")]
pub fn mock_user_info() -> UserInfo {
    UserInfo {
        email: "admin@tkexpedited.com".to_string(),
        display_name: "Operations Admin".to_string(),
        roles: vec!["admin".to_string(), "dispatcher".to_string()],
    }
}

/// 23 users across three dashboard pages, mixing role shapes: multi-role,
/// empty-role, and one tag the client does not recognize.
#[cfg(feature = "mock")]
pub fn mock_users() -> Vec<User> {
    let first_names = [
        "Marcus", "Elena", "Troy", "Dana", "Victor", "Priya", "Caleb", "Ruth",
    ];
    let last_names = ["Hayes", "Ortiz", "Jenkins", "Kowalski", "Nguyen", "Barton"];

    (1..=23)
        .map(|i| {
            let first = first_names[(i as usize) % first_names.len()];
            let last = last_names[(i as usize) % last_names.len()];
            let roles: Vec<String> = match i % 6 {
                0 => vec!["admin".to_string(), "driver".to_string()],
                1 => vec!["driver".to_string()],
                2 => vec!["dispatcher".to_string()],
                3 => vec!["broker".to_string(), "owner".to_string()],
                4 => Vec::new(),
                _ => vec!["user".to_string(), "night-shift".to_string()],
            };
            User {
                id: i,
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                display_name: format!("{first} {last}"),
                roles,
                is_approved: i % 4 != 0,
            }
        })
        .collect()
}

/// A handful of onboarded carriers, some without documents.
#[cfg(feature = "mock")]
pub fn mock_carriers() -> Vec<Carrier> {
    let companies = [
        ("Buckeye Freight LLC", "Buckeye", "Columbus", "43004", "3"),
        ("Redline Hauling Inc", "", "Cincinnati", "45202", "7"),
        ("Miami Valley Express", "MVX", "Dayton", "45402", "2"),
        ("Northstar Carriers", "", "Toledo", "43604", "11"),
        ("Queen City Logistics", "QCL", "Cincinnati", "45211", "5"),
        ("Tri-State Box Lines", "", "Hamilton", "45011", "4"),
        ("Overland Sprint LLC", "Overland", "Springfield", "45501", "6"),
    ];

    companies
        .iter()
        .enumerate()
        .map(|(idx, (name, dba, city, zip, trucks))| Carrier {
            id: (idx + 1) as i64,
            company_name: name.to_string(),
            dba: dba.to_string(),
            address: format!("{} Commerce Dr", 100 + idx * 40),
            city: city.to_string(),
            zip_code: zip.to_string(),
            phone: format!("513555{:04}", 1200 + idx * 7),
            email: format!("dispatch{}@example.com", idx + 1),
            mc: format!("MC-{}", 841_000 + idx * 13),
            usdot: format!("{}", 2_400_000 + idx * 29),
            fein_ssn: format!("31-{:07}", 4_100_000 + idx),
            number_of_trucks: trucks.to_string(),
            number_of_drivers: format!("{}", idx + 2),
            factor_invoices: if idx % 2 == 0 { "Yes" } else { "No" }.to_string(),
            preferred_states: "OH, KY, IN".to_string(),
            documents: if idx % 3 == 0 {
                Vec::new()
            } else {
                vec![
                    format!("carrier-{}-authority.pdf", idx + 1),
                    format!("carrier-{}-coi.pdf", idx + 1),
                ]
            },
        })
        .collect()
}
