use crate::enums::Leg;
use crate::error::GainError;
use crate::value_objects::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The buy and sell legs recorded for one account on one instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPosition {
    pub buy: Option<Price>,
    pub sell: Option<Price>,
}

impl AccountPosition {
    /// Returns the slot holding `leg`.
    #[must_use]
    pub fn leg(&self, leg: Leg) -> Option<Price> {
        match leg {
            Leg::Buy => self.buy,
            Leg::Sell => self.sell,
        }
    }

    /// Stores a leg price. Returns the price already in the slot, if any,
    /// leaving the slot unchanged in that case.
    pub fn record(&mut self, leg: Leg, price: Price) -> Result<(), Price> {
        let slot = match leg {
            Leg::Buy => &mut self.buy,
            Leg::Sell => &mut self.sell,
        };
        if let Some(existing) = *slot {
            return Err(existing);
        }
        *slot = Some(price);
        Ok(())
    }

    /// Sell price minus buy price.
    ///
    /// # Errors
    /// [`GainError::MissingLeg`] names the first absent leg;
    /// [`GainError::Overflow`] if the difference does not fit a `Decimal`.
    pub fn realized_gain(&self) -> Result<Decimal, GainError> {
        let buy = self.buy.ok_or(GainError::MissingLeg(Leg::Buy))?;
        let sell = self.sell.ok_or(GainError::MissingLeg(Leg::Sell))?;
        sell.checked_sub(buy).ok_or(GainError::Overflow)
    }
}
