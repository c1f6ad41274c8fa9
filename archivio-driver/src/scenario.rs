use archivio_core::GroupMessage;
use std::time::Duration;

/// Pausa tra primo e secondo turno della stessa conversazione.
pub const TURN_PAUSE: Duration = Duration::from_secs(1);

/// Un caso dello script: nome, turno da inviare e attesa prima dell'invio.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub turn: GroupMessage,
    pub pause_before: Duration,
}

impl Scenario {
    fn new(name: &'static str, sender: &str, group: &str, content: &str) -> Self {
        Self { name, turn: GroupMessage::new(sender, group, content), pause_before: Duration::ZERO }
    }

    fn after_pause(mut self, pause: Duration) -> Self {
        self.pause_before = pause;
        self
    }
}

/// Lo script di riparazione, in ordine fisso.
///
/// Il terzo turno completa il secondo (stesso mittente e gruppo): vanno inviati
/// consecutivamente, senza altri scenari in mezzo.
pub fn repair_script() -> Vec<Scenario> {
    vec![
        // luogo e guasto nello stesso messaggio
        Scenario::new(
            "1. Complete Repair Info",
            "user_test_01",
            "group_01",
            "我家3栋502的厨房水管爆了，赶紧来人！",
        ),
        // manca il luogo: il consumer deve chiederlo
        Scenario::new("2. Incomplete Info (First Turn)", "user_test_02", "group_01", "我这边的灯坏了"),
        Scenario::new("3. Follow-up Info (Second Turn)", "user_test_02", "group_01", "是在12栋301室")
            .after_pause(TURN_PAUSE),
        // rumore: nessun ticket
        Scenario::new("4. Noise/Chat", "user_test_03", "group_01", "收到，辛苦了"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_order_is_fixed() {
        let names: Vec<_> = repair_script().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "1. Complete Repair Info",
                "2. Incomplete Info (First Turn)",
                "3. Follow-up Info (Second Turn)",
                "4. Noise/Chat",
            ]
        );
    }

    #[test]
    fn follow_up_continues_only_the_incomplete_turn() {
        let script = repair_script();
        let (first, incomplete, follow_up, noise) = (&script[0], &script[1], &script[2], &script[3]);
        assert!(follow_up.turn.same_thread(&incomplete.turn));
        assert!(!follow_up.turn.same_thread(&first.turn));
        assert!(!follow_up.turn.same_thread(&noise.turn));
        assert!(!noise.turn.same_thread(&first.turn));
    }

    #[test]
    fn only_the_follow_up_waits() {
        let pauses: Vec<_> = repair_script().iter().map(|s| s.pause_before).collect();
        assert_eq!(pauses, vec![Duration::ZERO, Duration::ZERO, TURN_PAUSE, Duration::ZERO]);
    }
}
