//! The development team, served by the "about" endpoint.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub first_name: &'static str,
    pub last_name: &'static str,
}

pub(crate) const TEAM: [TeamMember; 2] = [
    TeamMember {
        first_name: "Ofek",
        last_name: "Drihan",
    },
    TeamMember {
        first_name: "Ziv",
        last_name: "Katzir",
    },
];
