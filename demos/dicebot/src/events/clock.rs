//! Hourly clock announcement.

use std::num::NonZeroU32;

use async_trait::async_trait;
use time::OffsetDateTime;

use herald::{ChatClient, Event, EventSpec, SendResult};

/// Channel the clock announces into.
const ANNOUNCE_CHANNEL: &str = "general";

const INTERVAL: NonZeroU32 = NonZeroU32::new(60).unwrap();

/// Announces the time once an hour, with a nod to high noon.
pub struct Clock {
    spec: EventSpec,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            spec: EventSpec::new(INTERVAL),
        }
    }
}

#[async_trait]
impl Event for Clock {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn spec(&self) -> &EventSpec {
        &self.spec
    }

    async fn run(&self, client: &dyn ChatClient) -> SendResult<()> {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        client
            .send_text(ANNOUNCE_CHANNEL, &clock_message(now.hour(), now.minute()))
            .await
    }
}

fn clock_message(hour: u8, minute: u8) -> String {
    if hour == 12 {
        "It's high noon!".to_string()
    } else {
        format!("It is {hour}:{minute}")
    }
}

herald::register_event!(Clock);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_noon_gets_its_moment() {
        assert_eq!(clock_message(12, 0), "It's high noon!");
        assert_eq!(clock_message(12, 59), "It's high noon!");
    }

    #[test]
    fn other_hours_report_the_time() {
        assert_eq!(clock_message(9, 5), "It is 9:5");
        assert_eq!(clock_message(23, 30), "It is 23:30");
    }

    #[test]
    fn interval_is_hourly() {
        assert_eq!(Clock::default().spec().interval_minutes().get(), 60);
    }
}
