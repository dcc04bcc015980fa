//! Deck and game integration tests.

use std::collections::HashSet;

use fivecard::{
    Card, CardSource, DECK_SIZE, DealError, Deck, EvaluateError, Game, GameError, GameOptions,
    HAND_SIZE, HandCategory, Rank, ResolveError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Deals a fixed sequence of cards, first card first.
#[derive(Debug, Clone)]
struct StackedSource {
    cards: Vec<Card>,
    next: usize,
}

impl StackedSource {
    fn new(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            next: 0,
        }
    }
}

impl CardSource for StackedSource {
    fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied();
        self.next += 1;
        card
    }

    fn reset(&mut self) {
        self.next = 0;
    }
}

fn joe_bob_sally_draws() -> Vec<Card> {
    vec![
        // Joe
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Diamonds, Rank::Jack),
        // Bob
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Spades, Rank::Nine),
        // Sally
        card(Suit::Hearts, Rank::Four),
        card(Suit::Clubs, Rank::Four),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
    ]
}

fn draw_all(deck: &mut Deck) -> Vec<Card> {
    std::iter::from_fn(|| deck.draw()).collect()
}

#[test]
fn deck_deals_every_card_once() {
    let mut deck = Deck::new(7);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let cards = draw_all(&mut deck);
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(cards.iter().collect::<HashSet<_>>().len(), DECK_SIZE);

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn deck_order_follows_seed() {
    let first = draw_all(&mut Deck::new(42));
    let second = draw_all(&mut Deck::new(42));
    let other = draw_all(&mut Deck::new(43));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn deck_reset_restores_all_cards() {
    let mut deck = Deck::new(1);
    for _ in 0..10 {
        deck.draw();
    }
    assert_eq!(deck.remaining(), DECK_SIZE - 10);

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(
        draw_all(&mut deck).into_iter().collect::<HashSet<_>>().len(),
        DECK_SIZE
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default();
    assert_eq!(options.hand_size, HAND_SIZE);

    let options = options.with_hand_size(3);
    assert_eq!(options.hand_size, 3);
}

#[test]
fn deal_hand_draws_hand_size_cards() {
    let mut game = Game::with_source(
        GameOptions::default(),
        StackedSource::new(&joe_bob_sally_draws()),
    );

    let hand = game.deal_hand("Joe").unwrap();
    assert_eq!(hand.player_id(), "Joe");
    assert_eq!(hand.len(), HAND_SIZE);
    assert_eq!(hand.category(), HandCategory::OnePair);
    assert_eq!(game.source().next, HAND_SIZE);
}

#[test]
fn play_reports_single_winner() {
    let mut game = Game::with_source(
        GameOptions::default(),
        StackedSource::new(&joe_bob_sally_draws()),
    );

    let result = game.play(["Joe", "Bob", "Sally"]).unwrap();
    assert_eq!(result.hands.len(), 3);
    assert_eq!(result.winners, vec![0]);
    assert_eq!(result.winner_ids(), ["Joe"]);
    assert!(!result.is_tie());
    assert_eq!(result.to_string(), "Joe");
}

#[test]
fn play_reports_tied_winners() {
    let mut draws = Vec::new();
    for suit in [Suit::Hearts, Suit::Spades] {
        for rank in [Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight] {
            draws.push(card(suit, rank));
        }
    }
    draws.extend([
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Diamonds, Rank::King),
        card(Suit::Clubs, Rank::Ace),
    ]);

    let mut game = Game::with_source(GameOptions::default(), StackedSource::new(&draws));
    let result = game.play(["Joe", "Bob", "Sally"]).unwrap();

    assert!(result.is_tie());
    assert_eq!(result.winner_ids(), ["Joe", "Bob"]);
    assert!(
        result
            .winning_hands()
            .all(|hand| hand.category() == HandCategory::Flush)
    );
    assert_eq!(result.to_string(), "Joe, Bob");
}

#[test]
fn play_resets_source_between_games() {
    let mut game = Game::with_source(
        GameOptions::default(),
        StackedSource::new(&joe_bob_sally_draws()),
    );

    let first = game.play(["Joe", "Bob", "Sally"]).unwrap();
    let second = game.play(["Joe", "Bob", "Sally"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn play_fails_when_deck_runs_out() {
    let draws = joe_bob_sally_draws();
    let mut game = Game::with_source(GameOptions::default(), StackedSource::new(&draws[..7]));

    assert_eq!(
        game.play(["Joe", "Bob"]).unwrap_err(),
        GameError::Deal(DealError::DeckExhausted)
    );
}

#[test]
fn play_fails_on_duplicate_draw() {
    let ace = card(Suit::Spades, Rank::Ace);
    let draws = [
        ace,
        card(Suit::Clubs, Rank::Two),
        ace,
        card(Suit::Clubs, Rank::Four),
        card(Suit::Clubs, Rank::Five),
    ];
    let mut game = Game::with_source(GameOptions::default(), StackedSource::new(&draws));

    assert_eq!(
        game.play(["Joe", "Bob"]).unwrap_err(),
        GameError::Deal(DealError::DuplicateCard(ace))
    );
}

#[test]
fn play_needs_two_players() {
    let mut game = Game::new(GameOptions::default(), 3);

    assert_eq!(
        game.play(["Joe"]).unwrap_err(),
        GameError::Resolve(ResolveError::InsufficientPlayers)
    );
}

#[test]
fn play_with_empty_hands_fails() {
    let mut game = Game::new(GameOptions::default().with_hand_size(0), 3);

    assert_eq!(
        game.play(["Joe", "Bob"]).unwrap_err(),
        GameError::Evaluate(EvaluateError::EmptyHand)
    );
}

#[test]
fn seeded_game_deals_distinct_cards() {
    let mut game = Game::new(GameOptions::default(), 2024);
    let players = ["Joe", "Bob", "Sally", "Ann"];
    let result = game.play(players).unwrap();

    assert_eq!(result.hands.len(), players.len());
    let dealt: HashSet<Card> = result
        .hands
        .iter()
        .flat_map(|hand| hand.cards().iter().copied())
        .collect();
    assert_eq!(dealt.len(), players.len() * HAND_SIZE);

    let best = result.hands.iter().map(|hand| hand.category()).max();
    assert!(!result.winners.is_empty());
    assert!(result.winning_hands().all(|hand| Some(hand.category()) == best));
    assert_eq!(game.source().remaining(), DECK_SIZE - dealt.len());
}

#[test]
fn game_errors_display_their_source() {
    assert_eq!(
        GameError::from(DealError::DeckExhausted).to_string(),
        "not enough cards in the deck"
    );
    assert_eq!(
        GameError::from(ResolveError::InsufficientPlayers).to_string(),
        "need at least 2 players"
    );
    assert_eq!(
        EvaluateError::DuplicateCard(card(Suit::Hearts, Rank::Ace)).to_string(),
        "card Ace of Hearts appears more than once in the hand"
    );
}
