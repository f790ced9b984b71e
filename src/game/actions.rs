use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn in [`RoundState::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal()?;
        self.player.add_card(card);
        debug!(%card, total = self.player.total(), "player hits");

        if self.player.is_bust() {
            self.state = RoundState::PlayerBust;
        }

        Ok(card)
    }

    /// Player action: Stay (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
