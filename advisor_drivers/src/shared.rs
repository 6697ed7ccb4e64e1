use blackjack_advisor::shoe::Shoe;
use blackjack_advisor::{
    Action, Advisor, Card, CountState, Hand, Rank, Rules, Seat, StrategyError, StrategyKind, Suit,
    Table,
};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Config file {0} does not exist or is a directory")]
    ConfigNotFound(String),
    #[error("Cannot find home directory")]
    NoHomeDirectory,
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid rule: {0}")]
    InvalidRule(serde::de::value::Error),
    #[error("Unknown strategy {0}")]
    UnknownStrategy(String),
    #[error("Invalid card pattern {0}")]
    InvalidCard(String),
    #[error("A dealer card must be provided in the scenario")]
    MissingDealerCard,
    #[error("Cannot burn {requested} cards from a shoe of {available}")]
    ShoeExhausted { requested: usize, available: usize },
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rule: ConfigRule,
    pub scenario: ConfigScenario,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRule {
    pub minimum_bet: u32,
    pub number_of_decks: u8,
    pub surrender_allowed: bool,
    pub double_restriction: String,
    pub double_after_split: bool,
}

impl TryFrom<ConfigRule> for Rules {
    type Error = serde::de::value::Error;

    fn try_from(config: ConfigRule) -> Result<Self, Self::Error> {
        if config.number_of_decks == 0 {
            return Err(serde::de::value::Error::custom("number_of_decks must be at least 1"));
        }
        if config.minimum_bet == 0 {
            return Err(serde::de::value::Error::custom("minimum_bet must be at least 1"));
        }
        let mut rules = Rules {
            minimum_bet: config.minimum_bet,
            number_of_decks: config.number_of_decks,
            surrender_allowed: config.surrender_allowed,
            double_after_split: config.double_after_split,
            ..Default::default()
        };
        rules.set_double_policy(config.double_restriction.parse()?);

        Ok(rules)
    }
}

/// A snapshot of one round. Cards are comma separated, e.g. `"10d, as"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigScenario {
    #[serde(default)]
    pub cards_already_dealt: Option<String>,
    /// Random cards dealt from a freshly shuffled shoe before the round.
    #[serde(default)]
    pub burn_random_cards: usize,
    pub player_hand: String,
    #[serde(default)]
    pub hand_came_from_split: bool,
    pub dealer_card: String,
}

/// What a strategy advises for a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub strategy: String,
    pub amount_to_bet: u32,
    pub count: Option<CountState>,
    pub player_hand: Hand,
    pub dealer_hand: Hand,
    pub cards_already_dealt: Vec<Card>,
    pub rules: Rules,
    pub next_action: Action,
}

impl std::fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Amount To Bet: {}", self.amount_to_bet)?;
        if let Some(count) = self.count {
            writeln!(
                f,
                "Running Count: {}  Cards Left: {}  True Count: {}",
                count.running_count,
                count.cards_remaining,
                count.true_count()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Strategy: {}", self.strategy)?;
        writeln!(f, "Player Hand: {}", self.player_hand)?;
        writeln!(f, "Dealer Hand: {}", self.dealer_hand)?;
        write!(f, "Cards Already Dealt: [")?;
        for (i, card) in self.cards_already_dealt.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Rules: {}", self.rules)?;
        writeln!(f)?;
        write!(f, "Next Move: {}", self.next_action)
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &str) -> Result<Config, DriverError> {
    let file_content = fs::read_to_string(filename).map_err(|source| DriverError::Io {
        path: filename.to_string(),
        source,
    })?;
    parse_config(&file_content)
}

pub fn parse_config(content: &str) -> Result<Config, DriverError> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn parse_strategy_kind(name: &str) -> Result<StrategyKind, DriverError> {
    name.parse()
        .map_err(|_| DriverError::UnknownStrategy(name.to_string()))
}

/// Parses one card: a rank of 2-10, A, K, Q or J followed by a suit of D, H,
/// S or C. Case does not matter.
pub fn parse_card(text: &str) -> Result<Card, DriverError> {
    let text = text.trim();
    let invalid = || DriverError::InvalidCard(text.to_string());

    let mut chars = text.chars();
    let suit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
        Some('D') => Suit::Diamonds,
        Some('H') => Suit::Hearts,
        Some('S') => Suit::Spades,
        Some('C') => Suit::Clubs,
        _ => return Err(invalid()),
    };
    let rank = match chars.as_str().to_ascii_uppercase().as_str() {
        "A" => Rank::Ace,
        "K" => Rank::King,
        "Q" => Rank::Queen,
        "J" => Rank::Jack,
        number => match number.parse::<u8>() {
            Ok(face @ 2..=10) => Rank::try_from(face)?,
            _ => return Err(invalid()),
        },
    };

    Ok(Card::new(rank, suit))
}

/// Parses a comma separated list of cards. Blank entries are skipped.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, DriverError> {
    text.split(',')
        .filter(|piece| !piece.trim().is_empty())
        .map(parse_card)
        .collect()
}

/// Replays a scenario at a fresh table and asks the strategy what to bet and
/// what to do next.
pub fn run_scenario(kind: StrategyKind, config: &Config) -> Result<ScenarioReport, DriverError> {
    let rules: Rules = config
        .rule
        .clone()
        .try_into()
        .map_err(DriverError::InvalidRule)?;
    let scenario = &config.scenario;

    let mut table = Table::new(rules);
    let player = table.add_player();
    let dummy_player = table.add_player();
    let advisor = Advisor::attach(kind, &mut table);

    if let Some(cards) = &scenario.cards_already_dealt {
        for card in parse_cards(cards)? {
            table.deal(card, dummy_player);
        }
    }
    if scenario.burn_random_cards > 0 {
        let mut shoe = Shoe::new(rules.number_of_decks);
        if scenario.burn_random_cards > shoe.cards_remaining() {
            return Err(DriverError::ShoeExhausted {
                requested: scenario.burn_random_cards,
                available: shoe.cards_remaining(),
            });
        }
        shoe.shuffle();
        for card in std::iter::from_fn(|| shoe.deal_card()).take(scenario.burn_random_cards) {
            table.deal(card, dummy_player);
        }
        log::debug!("burned {} random cards", scenario.burn_random_cards);
    }

    let amount_to_bet = advisor.compute_bet(table.rules());

    for card in parse_cards(&scenario.player_hand)? {
        table.deal(card, player);
    }
    table
        .hand_mut(player)
        .set_came_from_split(scenario.hand_came_from_split);
    for card in parse_cards(&scenario.dealer_card)? {
        table.deal(card, Seat::Dealer);
    }

    let dealer_up_card = table
        .dealer_up_card()
        .ok_or(DriverError::MissingDealerCard)?;
    let next_action = advisor.compute_action(table.hand(player), &dealer_up_card, table.rules())?;

    Ok(ScenarioReport {
        strategy: advisor.to_string(),
        amount_to_bet,
        count: advisor.count_state(),
        player_hand: table.hand(player).clone(),
        dealer_hand: table.hand(Seat::Dealer).clone(),
        cards_already_dealt: table.hand(dummy_player).cards().to_vec(),
        rules,
        next_action,
    })
}
