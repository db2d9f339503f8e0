//! Test fixtures

use crate::export::{Table, TableCell};
use crate::ports::{Locality, LocalityId};

pub fn springfield() -> Locality {
    Locality {
        id: LocalityId("1".to_string()),
        name: "Springfield".to_string(),
    }
}

pub fn locality(id: &str, name: &str) -> Locality {
    Locality {
        id: LocalityId(id.to_string()),
        name: name.to_string(),
    }
}

/// Two-by-two table: header row `A,B`, data row `1,2`
pub fn small_table(id: &str) -> Table {
    Table::new(id)
        .with_row(vec![TableCell::header("A"), TableCell::header("B")])
        .with_row(vec![TableCell::data("1"), TableCell::data("2")])
}
