//! Static collections served by the fixture server

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Fixture collections, in the order they are listed by the server
pub static FIXTURES: Lazy<IndexMap<&'static str, Value>> = Lazy::new(|| {
    let mut fixtures = IndexMap::new();

    fixtures.insert(
        "houses",
        json!([
            { "id": 1, "houseNo": "A-101", "societyId": 1, "ownerId": 1, "area": 1150.0, "rent": 18000.0, "forSale": false },
            { "id": 2, "houseNo": "A-102", "societyId": 1, "ownerId": 2, "area": 980.0, "rent": null, "forSale": true },
            { "id": 3, "houseNo": "B-204", "societyId": 2, "ownerId": null, "area": 1420.0, "rent": 26000.0, "forSale": false }
        ]),
    );
    fixtures.insert(
        "members",
        json!([
            { "id": "m-1", "name": "Priya Nair", "houseId": 1, "role": "secretary", "joinedOn": "2021-04-12" },
            { "id": "m-2", "name": "Rahul Mehta", "houseId": 2, "role": "resident", "joinedOn": "2022-01-03" },
            { "id": "m-3", "name": "Anita Rao", "houseId": 3, "role": "treasurer", "joinedOn": "2020-09-30" }
        ]),
    );
    fixtures.insert(
        "complaints",
        json!([
            { "id": 1, "houseId": 1, "subject": "Water leakage in bathroom", "status": "open", "raisedOn": "2024-02-10" },
            { "id": 2, "houseId": 3, "subject": "Lift not working", "status": "resolved", "raisedOn": "2024-01-22" }
        ]),
    );
    fixtures.insert(
        "societies",
        json!([
            { "id": 1, "name": "Green Meadows", "address": "12 Park Road", "city": "Pune" },
            { "id": 2, "name": "Lakeview Residency", "address": "4 Lake Street", "city": "Bengaluru" }
        ]),
    );
    fixtures.insert(
        "rent",
        json!([
            { "id": 1, "houseId": 1, "title": "2BHK near park", "rent": 18000.0, "deposit": 50000.0, "available": true },
            { "id": 2, "houseId": 3, "title": "3BHK lake facing", "rent": 26000.0, "deposit": 80000.0, "available": false }
        ]),
    );
    fixtures.insert(
        "sell",
        json!([
            { "id": 1, "houseId": 2, "title": "Corner flat, first floor", "price": 6500000.0, "negotiable": true }
        ]),
    );
    fixtures.insert(
        "search",
        json!([
            { "id": 1, "kind": "house", "label": "A-101, Green Meadows" },
            { "id": 2, "kind": "house", "label": "B-204, Lakeview Residency" },
            { "id": 3, "kind": "society", "label": "Green Meadows" }
        ]),
    );
    fixtures.insert(
        "services",
        json!([
            { "id": 1, "name": "Plumbing", "contact": "+91 98200 00001", "rate": 400.0 },
            { "id": 2, "name": "Electrician", "contact": "+91 98200 00002", "rate": 450.0 },
            { "id": 3, "name": "Housekeeping", "contact": "+91 98200 00003", "rate": 300.0 }
        ]),
    );

    fixtures
});

pub fn collection(name: &str) -> Option<&'static Value> {
    FIXTURES.get(name)
}

pub fn collection_names() -> Vec<&'static str> {
    FIXTURES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{House, Member};

    #[test]
    fn test_every_collection_is_an_array() {
        for name in collection_names() {
            assert!(collection(name).unwrap().is_array(), "{} is not an array", name);
        }
        assert_eq!(collection_names().len(), 8);
    }

    #[test]
    fn test_fixtures_match_entity_shapes() {
        let houses: Vec<House> = serde_json::from_value(collection("houses").unwrap().clone()).unwrap();
        assert_eq!(houses[0].house_no, "A-101");

        let members: Vec<Member> = serde_json::from_value(collection("members").unwrap().clone()).unwrap();
        assert_eq!(members[2].id, "m-3");
    }
}
