//! Problem model

use mb_queries::Grade;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Board angle record attached to a problem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MoonBoardConfiguration {
    pub id: i64,
    pub description: String,
    pub low_grade: Value,
    pub high_grade: Value,
}

/// User who set a problem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Setter {
    pub id: String,
    pub nickname: String,
    pub firstname: String,
    pub lastname: String,
    pub city: String,
    pub country: String,
    pub profile_image_url: String,
    pub can_share_data: bool,
}

/// Hold layout a problem was set on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HoldSetup {
    pub id: i64,
    pub description: String,
    pub setby: Value,
    pub date_inserted: Value,
    pub date_updated: Value,
    pub date_deleted: Value,
    pub is_locked: bool,
    pub holdsets: Value,
    pub moon_board_configurations: Value,
    pub hold_layout_id: i64,
    pub allow_climb_methods: bool,
}

/// A hold used by a problem, e.g. `"A5"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Move {
    pub id: i64,
    pub description: String,
    pub is_start: bool,
    pub is_end: bool,
}

/// Placement of a hold on the board grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Location {
    pub id: i64,
    pub holdset: Value,
    pub description: Value,
    pub x: i64,
    pub y: i64,
    pub color: String,
    pub rotation: i64,
    #[serde(rename = "Type")]
    pub kind: i64,
    pub hold_number: Value,
    pub direction: i64,
    pub direction_string: String,
}

/// A climbing problem as listed by the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Problem {
    pub method: String,
    pub name: String,
    pub grade: String,
    pub user_grade: Value,
    pub moon_board_configuration: MoonBoardConfiguration,
    pub moon_board_configuration_id: i64,
    pub setter: Setter,
    pub first_ascender: bool,
    pub rating: i64,
    pub user_rating: i64,
    pub repeats: i64,
    pub attempts: i64,
    pub holdsetup: HoldSetup,
    pub is_benchmark: bool,
    pub moves: Vec<Move>,
    pub holdsets: Value,
    pub locations: Vec<Location>,
    pub repeat_text: String,
    pub number_of_tries: Value,
    pub name_for_url: String,
    pub id: i64,
    pub api_id: i64,
    pub date_inserted: String,
    pub date_updated: Value,
    pub date_deleted: Value,
    pub date_time_string: String,
}

impl Problem {
    /// Grade on the ordered scale, if the catalog string is recognised
    pub fn parsed_grade(&self) -> Option<Grade> {
        self.grade.parse().ok()
    }

    pub fn start_holds(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_start)
    }

    pub fn end_holds(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_end)
    }
}
