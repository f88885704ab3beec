// Editable form state for the login screen and the admin player editor.
//
// Forms hold raw text while the user types and only produce domain values
// on submit. Validation is intentionally loose, matching the editor's
// behavior: names and the team reference are required, numeric fields fall
// back to zero when they fail to parse.

use thiserror::Error;

use crate::model::{Player, PlayerDraft, Position, SeasonAverages};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },
}

// ---------------------------------------------------------------------------
// Login form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields must be non-empty before the credentials are even tried.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.is_empty() {
            return Err(FormError::Required { field: "username" });
        }
        if self.password.is_empty() {
            return Err(FormError::Required { field: "password" });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

// ---------------------------------------------------------------------------
// Player form
// ---------------------------------------------------------------------------

/// Fields of the player editor, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    FirstName,
    LastName,
    Team,
    Position,
    Number,
    Height,
    Weight,
    Nationality,
    BirthDate,
    Ppg,
    Rpg,
    Apg,
    Efficiency,
}

impl PlayerField {
    pub const ALL: [PlayerField; 13] = [
        PlayerField::FirstName,
        PlayerField::LastName,
        PlayerField::Team,
        PlayerField::Position,
        PlayerField::Number,
        PlayerField::Height,
        PlayerField::Weight,
        PlayerField::Nationality,
        PlayerField::BirthDate,
        PlayerField::Ppg,
        PlayerField::Rpg,
        PlayerField::Apg,
        PlayerField::Efficiency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerField::FirstName => "First name",
            PlayerField::LastName => "Last name",
            PlayerField::Team => "Team",
            PlayerField::Position => "Position",
            PlayerField::Number => "Number",
            PlayerField::Height => "Height (cm)",
            PlayerField::Weight => "Weight (kg)",
            PlayerField::Nationality => "Nationality",
            PlayerField::BirthDate => "Birth date",
            PlayerField::Ppg => "PPG",
            PlayerField::Rpg => "RPG",
            PlayerField::Apg => "APG",
            PlayerField::Efficiency => "EFF",
        }
    }

    /// Team and position are pickers, everything else is typed text.
    pub fn is_text(&self) -> bool {
        !matches!(self, PlayerField::Team | PlayerField::Position)
    }
}

/// Working state of the admin player editor. `editing_id` is `Some` when an
/// existing record is being edited and `None` for a new one.
#[derive(Debug, Clone)]
pub struct PlayerForm {
    pub editing_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub team_id: String,
    pub position: Position,
    pub number: String,
    pub height: String,
    pub weight: String,
    pub nationality: String,
    pub birth_date: String,
    pub ppg: String,
    pub rpg: String,
    pub apg: String,
    pub efficiency: String,
}

impl PlayerForm {
    /// A blank form for a new player, pre-selecting `team_id`.
    pub fn blank(team_id: &str) -> Self {
        Self {
            editing_id: None,
            first_name: String::new(),
            last_name: String::new(),
            team_id: team_id.to_string(),
            position: Position::PointGuard,
            number: String::new(),
            height: String::new(),
            weight: String::new(),
            nationality: String::new(),
            birth_date: String::new(),
            ppg: String::new(),
            rpg: String::new(),
            apg: String::new(),
            efficiency: String::new(),
        }
    }

    /// Pre-fill the form from an existing record for editing.
    pub fn from_player(player: &Player) -> Self {
        Self {
            editing_id: Some(player.id.clone()),
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            team_id: player.team_id.clone(),
            position: player.position,
            number: player.number.to_string(),
            height: player.height.to_string(),
            weight: player.weight.to_string(),
            nationality: player.nationality.clone(),
            birth_date: player.birth_date.clone(),
            ppg: player.stats.ppg.to_string(),
            rpg: player.stats.rpg.to_string(),
            apg: player.stats.apg.to_string(),
            efficiency: player.stats.efficiency.to_string(),
        }
    }

    pub fn text_mut(&mut self, field: PlayerField) -> Option<&mut String> {
        match field {
            PlayerField::FirstName => Some(&mut self.first_name),
            PlayerField::LastName => Some(&mut self.last_name),
            PlayerField::Number => Some(&mut self.number),
            PlayerField::Height => Some(&mut self.height),
            PlayerField::Weight => Some(&mut self.weight),
            PlayerField::Nationality => Some(&mut self.nationality),
            PlayerField::BirthDate => Some(&mut self.birth_date),
            PlayerField::Ppg => Some(&mut self.ppg),
            PlayerField::Rpg => Some(&mut self.rpg),
            PlayerField::Apg => Some(&mut self.apg),
            PlayerField::Efficiency => Some(&mut self.efficiency),
            PlayerField::Team | PlayerField::Position => None,
        }
    }

    /// Validate and convert to a draft record.
    ///
    /// Names are trimmed and must be non-empty, as must the team reference.
    /// Numeric fields fall back to zero when blank or unparseable.
    pub fn validate(&self) -> Result<PlayerDraft, FormError> {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(FormError::Required {
                field: "first name",
            });
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(FormError::Required { field: "last name" });
        }
        if self.team_id.is_empty() {
            return Err(FormError::Required { field: "team" });
        }

        Ok(PlayerDraft {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            team_id: self.team_id.clone(),
            position: self.position,
            number: parse_or_zero(&self.number),
            height: parse_or_zero(&self.height),
            weight: parse_or_zero(&self.weight),
            nationality: self.nationality.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            stats: SeasonAverages {
                ppg: parse_or_zero_f64(&self.ppg),
                rpg: parse_or_zero_f64(&self.rpg),
                apg: parse_or_zero_f64(&self.apg),
                efficiency: parse_or_zero_f64(&self.efficiency),
            },
        })
    }
}

fn parse_or_zero(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

fn parse_or_zero_f64(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn login_form_requires_both_fields() {
        let mut form = LoginForm::default();
        assert_eq!(
            form.validate(),
            Err(FormError::Required { field: "username" })
        );

        form.username = "admin".into();
        assert_eq!(
            form.validate(),
            Err(FormError::Required { field: "password" })
        );

        form.password = "x".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut form = PlayerForm::blank("rm");
        form.last_name = "Doe".into();
        assert_eq!(
            form.validate(),
            Err(FormError::Required {
                field: "first name"
            })
        );

        form.first_name = "   ".into();
        assert_eq!(
            form.validate(),
            Err(FormError::Required {
                field: "first name"
            })
        );

        form.first_name = "John".into();
        form.last_name = "  ".into();
        assert_eq!(
            form.validate(),
            Err(FormError::Required { field: "last name" })
        );
    }

    #[test]
    fn missing_team_is_rejected() {
        let mut form = PlayerForm::blank("");
        form.first_name = "John".into();
        form.last_name = "Doe".into();
        assert_eq!(form.validate(), Err(FormError::Required { field: "team" }));
    }

    #[test]
    fn numeric_fields_fall_back_to_zero() {
        let mut form = PlayerForm::blank("rm");
        form.first_name = "John".into();
        form.last_name = "Doe".into();
        form.number = "not a number".into();
        form.ppg = "".into();
        form.rpg = "7.5".into();

        let draft = form.validate().unwrap();
        assert_eq!(draft.number, 0);
        assert_eq!(draft.stats.ppg, 0.0);
        assert_eq!(draft.stats.rpg, 7.5);
    }

    #[test]
    fn names_are_trimmed_on_submit() {
        let mut form = PlayerForm::blank("rm");
        form.first_name = "  John ".into();
        form.last_name = " Doe  ".into();
        let draft = form.validate().unwrap();
        assert_eq!(draft.first_name, "John");
        assert_eq!(draft.last_name, "Doe");
    }

    #[test]
    fn prefill_round_trips_an_existing_record() {
        let player = &seed::players()[0];
        let form = PlayerForm::from_player(player);
        assert_eq!(form.editing_id.as_deref(), Some("p1"));

        let draft = form.validate().unwrap();
        let rebuilt = draft.into_player(player.id.clone());
        assert_eq!(&rebuilt, player);
    }

    #[test]
    fn every_text_field_is_reachable() {
        let mut form = PlayerForm::blank("rm");
        for field in PlayerField::ALL {
            assert_eq!(form.text_mut(field).is_some(), field.is_text());
        }
    }
}
