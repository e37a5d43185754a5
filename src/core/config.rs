//! Game configuration.
//!
//! Everything that shapes a game is passed in through `GameConfig`; the
//! engine keeps no process-wide lists. Configs can be built in code with the
//! `with_*` methods or loaded from JSON.

use serde::{Deserialize, Serialize};

use super::company::CompanyRegistry;
use super::error::ConfigError;
use super::player::PlayerId;
use crate::strategy::StrategyCatalog;

/// The six companies of the base game.
pub const DEFAULT_COMPANIES: [(&str, u32); 6] = [
    ("Giraffe Beer", 5),
    ("Bowwow Games", 6),
    ("Flamingo Soft", 7),
    ("Octo Coffee", 8),
    ("Hippo Powertech", 9),
    ("Elephant Mars Travel", 10),
];

/// Companies added for larger tables.
pub const EXTRA_COMPANIES: [(&str, u32); 1] = [("Woofy Railway", 11)];

/// A company as written in a config: name plus number of shares issued.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDef {
    pub name: String,
    pub total_shares: u32,
}

impl CompanyDef {
    pub fn new(name: impl Into<String>, total_shares: u32) -> Self {
        Self {
            name: name.into(),
            total_shares,
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use startups_engine::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_players(5, 0)
///     .with_starting_coins(12);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.companies.len(), 6);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub companies: Vec<CompanyDef>,

    /// Seats at the table (1-255).
    pub player_count: usize,

    /// The first `human_count` seats are prompt-driven and get no strategy.
    pub human_count: usize,

    pub starting_coins: i64,

    /// Cards dealt to each player before the first turn.
    pub hand_size: usize,

    /// Cards set aside face-down after the shuffle.
    pub removed_cards: usize,

    /// Strategy catalog names, assigned to automated seats in rotation.
    pub bot_lineup: Vec<String>,

    /// Seat played step by step by an external agent while the other seats
    /// are resolved in batches. `None` plays every seat one phase at a time.
    pub focus_player: Option<PlayerId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            companies: DEFAULT_COMPANIES
                .iter()
                .map(|(name, shares)| CompanyDef::new(*name, *shares))
                .collect(),
            player_count: 4,
            human_count: 1,
            starting_coins: 10,
            hand_size: 3,
            removed_cards: 5,
            bot_lineup: ["avoid_loss", "gain_money", "seek_loss", "same_cards", "random"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            focus_player: None,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize, human_count: usize) -> Self {
        self.player_count = player_count;
        self.human_count = human_count;
        self
    }

    /// Replace the company list with `(name, shares)` pairs.
    #[must_use]
    pub fn with_companies<S: AsRef<str>>(mut self, defs: &[(S, u32)]) -> Self {
        self.companies = defs
            .iter()
            .map(|(name, shares)| CompanyDef::new(name.as_ref(), *shares))
            .collect();
        self
    }

    /// Append the expansion companies.
    #[must_use]
    pub fn with_extra_companies(mut self) -> Self {
        self.companies.extend(
            EXTRA_COMPANIES
                .iter()
                .map(|(name, shares)| CompanyDef::new(*name, *shares)),
        );
        self
    }

    #[must_use]
    pub fn with_starting_coins(mut self, coins: i64) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_removed_cards(mut self, removed: usize) -> Self {
        self.removed_cards = removed;
        self
    }

    #[must_use]
    pub fn with_bot_lineup<S: AsRef<str>>(mut self, lineup: &[S]) -> Self {
        self.bot_lineup = lineup.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_focus_player(mut self, player: PlayerId) -> Self {
        self.focus_player = Some(player);
        self
    }

    /// Number of seats driven by strategies.
    #[must_use]
    pub fn automated_count(&self) -> usize {
        self.player_count.saturating_sub(self.human_count)
    }

    /// Total cards the configured companies issue.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.companies.iter().map(|c| c.total_shares as usize).sum()
    }

    /// Build the company registry for this config.
    #[must_use]
    pub fn registry(&self) -> CompanyRegistry {
        let mut registry = CompanyRegistry::new();
        for def in &self.companies {
            registry.register(def.name.clone(), def.total_shares);
        }
        registry
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=255).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.human_count > self.player_count {
            return Err(ConfigError::TooManyHumans {
                humans: self.human_count,
                players: self.player_count,
            });
        }
        if self.companies.is_empty() {
            return Err(ConfigError::NoCompanies);
        }
        if self.companies.len() > 256 {
            return Err(ConfigError::TooManyCompanies(self.companies.len()));
        }
        for (i, def) in self.companies.iter().enumerate() {
            if def.total_shares == 0 {
                return Err(ConfigError::EmptyCompany(def.name.clone()));
            }
            if self.companies[..i].iter().any(|c| c.name == def.name) {
                return Err(ConfigError::DuplicateCompany(def.name.clone()));
            }
        }

        // at least one card must stay in the deck or no turn can start
        let needed = self.removed_cards + self.player_count * self.hand_size;
        if needed >= self.total_cards() {
            return Err(ConfigError::DeckTooSmall {
                cards: self.total_cards(),
                needed,
            });
        }

        if self.automated_count() > 0 && self.bot_lineup.is_empty() {
            return Err(ConfigError::EmptyLineup(self.automated_count()));
        }
        let catalog = StrategyCatalog::standard();
        if let Some(unknown) = self.bot_lineup.iter().find(|n| !catalog.contains(n)) {
            return Err(ConfigError::UnknownStrategy(unknown.clone()));
        }

        if let Some(focus) = self.focus_player {
            if focus.index() >= self.player_count {
                return Err(ConfigError::PlayerCount(focus.index() + 1));
            }
            // every seat except the focus one is resolved by its strategy
            if let Some(human) = PlayerId::all(self.human_count).find(|&p| p != focus) {
                return Err(ConfigError::HumanBesideFocus(human, focus));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_cards(), 45);
        assert_eq!(config.automated_count(), 3);
    }

    #[test]
    fn test_extra_companies() {
        let config = GameConfig::default().with_extra_companies();
        assert_eq!(config.companies.len(), 7);
        assert_eq!(config.total_cards(), 56);
        assert_eq!(config.registry().name_of(crate::core::CompanyId::new(6)), "Woofy Railway");
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert!(matches!(
            GameConfig::default().with_players(0, 0).validate(),
            Err(ConfigError::PlayerCount(0))
        ));
        assert!(matches!(
            GameConfig::default().with_players(2, 3).validate(),
            Err(ConfigError::TooManyHumans { .. })
        ));
        assert!(matches!(
            GameConfig::default()
                .with_companies(&[("A", 3), ("A", 4)])
                .validate(),
            Err(ConfigError::DuplicateCompany(_))
        ));
        assert!(matches!(
            GameConfig::default().with_companies(&[("A", 3)]).validate(),
            Err(ConfigError::DeckTooSmall { .. })
        ));
        assert!(matches!(
            GameConfig::default().with_bot_lineup(&["telepath"]).validate(),
            Err(ConfigError::UnknownStrategy(_))
        ));
        assert!(matches!(
            GameConfig::default()
                .with_players(4, 1)
                .with_focus_player(PlayerId::new(2))
                .validate(),
            Err(ConfigError::HumanBesideFocus(_, _))
        ));
        assert!(GameConfig::default()
            .with_players(4, 1)
            .with_focus_player(PlayerId::new(0))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_needs_a_card_left_to_draw() {
        // 11 cards: 5 set aside and 2 x 3 dealt would empty the deck
        let exact = GameConfig::default()
            .with_companies(&[("A", 5), ("B", 6)])
            .with_players(2, 0);
        assert!(matches!(
            exact.validate(),
            Err(ConfigError::DeckTooSmall { cards: 11, needed: 11 })
        ));
        assert!(exact.with_removed_cards(4).validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(
            r#"{ "player_count": 3, "human_count": 0, "starting_coins": 8 }"#,
        )
        .unwrap();

        assert_eq!(config.player_count, 3);
        assert_eq!(config.starting_coins, 8);
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.companies.len(), 6);

        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
