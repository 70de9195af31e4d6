//! Notifications emitted by the game after successful commands.

use super::{Cell, Outcome, Piece, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Something that happened in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece was chosen for the opponent.
    PieceSelected {
        /// The selecting player.
        by: Player,
        /// The piece handed over.
        piece: Piece,
    },
    /// The held piece was placed.
    PiecePlaced {
        /// The placing player.
        by: Player,
        /// The piece placed.
        piece: Piece,
        /// Where it went.
        cell: Cell,
    },
    /// A placement completed and the turn advanced.
    TurnChanged {
        /// The actor who selects next.
        actor: Player,
        /// Number of placements made so far.
        turn_number: usize,
    },
    /// The game reached a terminal state.
    GameOver(Outcome),
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnMut(&GameEvent)>;

/// Ordered list of event subscribers.
///
/// Subscribers run synchronously in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` and returns a handle for removing it.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Returns the number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Checks if there are no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Delivers `event` to every subscriber.
    #[instrument(skip(self), fields(subscribers = self.subscribers.len()))]
    pub fn publish(&mut self, event: &GameEvent) {
        trace!("Publishing event");
        for (_, subscriber) in &mut self.subscribers {
            subscriber(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
