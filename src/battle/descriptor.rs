use schema::{Accuracy, MoveData};

/// Per-invocation working copy of a catalog move. Ability hooks rewrite it
/// (power, accuracy, chance fields, tags) to steer the later stages of the
/// same resolution; the catalog entry itself is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDescriptor {
    pub data: MoveData,
    /// Set by Mold Breaker: defender abilities that would block are ignored.
    pub mold_breaker: bool,
    /// Set by Sniper: critical hits deal triple instead of double damage.
    pub sniper: bool,
    /// Set by Scrappy: a Ghost defender type is neutral, not immune.
    pub scrappy: bool,
}

impl MoveDescriptor {
    pub fn new(data: MoveData) -> Self {
        MoveDescriptor {
            data,
            mold_breaker: false,
            sniper: false,
            scrappy: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Multiply power, rounding up. Zero-power moves are left alone.
    pub fn scale_power(&mut self, factor: f64) {
        if self.data.power > 0 {
            self.data.power = (self.data.power as f64 * factor).ceil() as u16;
        }
    }

    /// Multiply a fractional accuracy, capped at 1.0. Moves that always hit
    /// are left alone.
    pub fn scale_accuracy(&mut self, factor: f64) {
        if let Accuracy::Fraction(value) = self.data.accuracy {
            self.data.accuracy = Accuracy::Fraction((value * factor).min(1.0));
        }
    }

    /// Every optional chance field, for abilities that rescale them as a group.
    pub fn chance_fields_mut(&mut self) -> [&mut Option<f64>; 5] {
        [
            &mut self.data.apply_status_chance,
            &mut self.data.debuff_chance,
            &mut self.data.flinch_chance,
            &mut self.data.confusion_chance,
            &mut self.data.secondary_chance,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_power_scaling_rounds_up() {
        let mut descriptor = MoveDescriptor::new(MoveData {
            power: 35,
            ..MoveData::default()
        });
        descriptor.scale_power(1.5);
        assert_eq!(descriptor.data.power, 53);

        let mut status_move = MoveDescriptor::new(MoveData::default());
        status_move.scale_power(2.0);
        assert_eq!(status_move.data.power, 0);
    }

    #[test]
    fn test_accuracy_scaling_caps_at_one() {
        let mut descriptor = MoveDescriptor::new(MoveData {
            accuracy: Accuracy::Fraction(0.9),
            ..MoveData::default()
        });
        descriptor.scale_accuracy(1.3);
        assert_eq!(descriptor.data.accuracy, Accuracy::Fraction(1.0));

        let mut swift = MoveDescriptor::new(MoveData::default());
        swift.scale_accuracy(0.5);
        assert_eq!(swift.data.accuracy, Accuracy::AlwaysHits);
    }
}
