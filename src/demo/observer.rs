//! Observer demo: a newsletter subject that notifies whatever observers are
//! registered, next to a manager that hand-codes every delivery channel.

use crate::demo::creational::owned;
use crate::demo::{Action, ActionSpec, Demo, DemoConfig, DemoError, DemoLog, Panel, timestamp};
use rand::Rng;
use rand::rngs::StdRng;

pub const NEWSLETTER_MESSAGES: [&str; 4] = [
    "New product launch!",
    "Weekly newsletter",
    "Flash sale alert!",
    "System maintenance notice",
];

pub trait Observer {
    fn id(&self) -> &str;
    fn notify(&mut self, message: &str);
}

/// Reader that keeps what it was sent.
#[derive(Debug)]
pub struct Reader {
    id: String,
    received: Vec<String>,
}

impl Reader {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            received: Vec::new(),
        }
    }

    pub fn received(&self) -> &[String] {
        &self.received
    }
}

impl Observer for Reader {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify(&mut self, message: &str) {
        self.received.push(message.to_string());
    }
}

/// Subject side: knows nothing about observers beyond the trait.
pub struct NewsletterSubject {
    observers: Vec<Box<dyn Observer>>,
    notifications: usize,
    log: DemoLog,
}

impl NewsletterSubject {
    pub fn new(log: DemoLog) -> Self {
        Self {
            observers: Vec::new(),
            notifications: 0,
            log,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.log
            .push(format!("✅ [{}] {} subscribed", timestamp(), observer.id()));
        self.observers.push(observer);
    }

    /// Drop every observer with `id`; unknown ids are logged all the same.
    pub fn unsubscribe(&mut self, id: &str) {
        self.observers.retain(|observer| observer.id() != id);
        self.log
            .push(format!("❌ [{}] {id} unsubscribed", timestamp()));
    }

    pub fn notify(&mut self, message: &str) {
        self.notifications += 1;
        let stamp = timestamp();
        if self.observers.is_empty() {
            self.log
                .push(format!("📢 [{stamp}] Sent \"{message}\" to 0 subscribers"));
            return;
        }
        for observer in &mut self.observers {
            observer.notify(message);
        }
        self.log.push(format!(
            "📢 [{stamp}] Sent \"{message}\" to {} subscribers automatically",
            self.observers.len()
        ));
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications
    }

    pub fn log(&self) -> &DemoLog {
        &self.log
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManualSubscriber {
    pub id: String,
    pub email: String,
    pub sms: bool,
    pub push: bool,
}

/// Every channel is a field on the subscriber and a branch in `send`.
pub struct ManualNotificationManager {
    subscribers: Vec<ManualSubscriber>,
    attempts: usize,
    log: DemoLog,
}

impl ManualNotificationManager {
    pub fn new(log: DemoLog) -> Self {
        Self {
            subscribers: Vec::new(),
            attempts: 0,
            log,
        }
    }

    pub fn add_subscriber(&mut self, subscriber: ManualSubscriber) {
        self.log
            .push(format!("✅ [{}] {} added manually", timestamp(), subscriber.id));
        self.subscribers.push(subscriber);
    }

    pub fn remove_subscriber(&mut self, id: &str) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.log
            .push(format!("❌ [{}] {id} removed manually", timestamp()));
    }

    pub fn send(&mut self, message: &str) {
        self.attempts += 1;
        let stamp = timestamp();
        if self.subscribers.is_empty() {
            self.log.push(format!(
                "📢 [{stamp}] Manual send: \"{message}\" to 0 subscribers"
            ));
            return;
        }
        let emails = self.subscribers.len();
        let sms = self.subscribers.iter().filter(|s| s.sms).count();
        let push = self.subscribers.iter().filter(|s| s.push).count();
        self.log.push(format!(
            "📢 [{stamp}] Manual send: \"{message}\" ({emails} emails, {sms} SMS, {push} push) - lots of manual logic!"
        ));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts
    }

    pub fn log(&self) -> &DemoLog {
        &self.log
    }
}

const OBSERVER_MAINTENANCE: &[&str] = &[
    "🔍 Request: Add Slack notification support",
    "📝 Step 1: Create SlackObserver implementing Observer interface",
    "🔌 Step 2: SlackObserver.notify() handles Slack API calls",
    "✅ DONE! All existing notifications now go to Slack automatically",
    "🧪 Zero changes needed to existing notification logic",
    "🚀 Future notifications automatically include Slack",
];

const MANUAL_MAINTENANCE: &[&str] = &[
    "🔍 Request: Add Slack notification support",
    "📝 Step 1: Update subscriber data structure to include Slack preference",
    "❌ Step 2: Find and update sendNotification() method",
    "❌ Step 3: Add Slack API integration logic to sendNotification()",
    "❌ Step 4: Update addSubscriber() to handle Slack preference",
    "❌ Step 5: Update removeSubscriber() if Slack affects removal logic",
    "❌ Step 6: Update all UI forms to collect Slack preferences",
    "❌ Step 7: Update database schema for Slack data",
    "❌ Step 8: Migrate existing users to new schema",
    "❌ Step 9: Update all notification calling code to handle Slack",
    "❌ Step 10: Test every single notification type manually",
    "⚠️  Step 11: Hope the complex sendNotification() logic doesn't break",
    "💥 RISK: High chance of introducing bugs in existing notifications",
];

const OBSERVER_ACTIONS: &[ActionSpec] = &[
    ActionSpec::bare("subscribe", "Subscribe a random reader to the newsletter"),
    ActionSpec::with("unsubscribe", "<id>", "Unsubscribe a reader by id"),
    ActionSpec::bare("notify", "Send a random newsletter to every observer"),
    ActionSpec::bare("manual-subscribe", "Add a random subscriber to the manual manager"),
    ActionSpec::with("manual-unsubscribe", "<id>", "Remove a manual subscriber by id"),
    ActionSpec::bare("manual-notify", "Send a random message by hand"),
    ActionSpec::bare("maintenance", "Compare the work needed to add Slack delivery"),
];

pub struct ObserverDemo {
    config: DemoConfig,
    rng: StdRng,
    subject: NewsletterSubject,
    manual: ManualNotificationManager,
    show_maintenance: bool,
}

impl ObserverDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            config: *config,
            rng: config.rng(),
            subject: NewsletterSubject::new(config.log()),
            manual: ManualNotificationManager::new(config.log()),
            show_maintenance: false,
        }
    }

    fn random_user(&mut self) -> String {
        format!("User{}", self.rng.gen_range(0..1000))
    }

    fn random_message(&mut self) -> &'static str {
        NEWSLETTER_MESSAGES[self.rng.gen_range(0..NEWSLETTER_MESSAGES.len())]
    }
}

impl Demo for ObserverDemo {
    fn pattern(&self) -> &'static str {
        "observer"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        OBSERVER_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "subscribe" => {
                let id = self.random_user();
                self.subject.subscribe(Box::new(Reader::new(id)));
            }
            "unsubscribe" => {
                let id = action.required_argument(self.pattern())?;
                self.subject.unsubscribe(id);
            }
            "notify" => {
                let message = self.random_message();
                self.subject.notify(message);
            }
            "manual-subscribe" => {
                let id = self.random_user();
                let subscriber = ManualSubscriber {
                    email: format!("{}@example.com", id.to_lowercase()),
                    sms: self.rng.gen_bool(0.5),
                    push: self.rng.gen_bool(0.5),
                    id,
                };
                self.manual.add_subscriber(subscriber);
            }
            "manual-unsubscribe" => {
                let id = action.required_argument(self.pattern())?;
                self.manual.remove_subscriber(id);
            }
            "manual-notify" => {
                let message = self.random_message();
                self.manual.send(message);
            }
            "maintenance" => self.show_maintenance = true,
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        let mut observer = vec![
            format!("Subscribers: {}", self.subject.subscriber_count()),
            format!("Notifications sent: {}", self.subject.notification_count()),
        ];
        observer.extend(self.subject.log().lines());

        let mut manual = vec![
            format!("Subscribers: {}", self.manual.subscriber_count()),
            format!("Send attempts: {}", self.manual.attempt_count()),
        ];
        manual.extend(self.manual.log().lines());

        let mut panels = vec![
            Panel::new("Observer Pattern", observer),
            Panel::new("Manual Notifications", manual),
        ];
        if self.show_maintenance {
            panels.push(Panel::new("Maintenance: Observer", owned(OBSERVER_MAINTENANCE)));
            panels.push(Panel::new("Maintenance: Manual", owned(MANUAL_MAINTENANCE)));
        }
        panels
    }

    fn reset(&mut self) {
        let config = self.config;
        *self = Self::new(&config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoSession;

    fn lines(session: &DemoSession, title: &str) -> Vec<String> {
        session
            .view()
            .into_iter()
            .find(|panel| panel.title == title)
            .map(|panel| panel.lines)
            .unwrap_or_else(|| panic!("no panel {title}"))
    }

    #[test]
    fn subject_notifies_every_registered_observer() {
        let mut subject = NewsletterSubject::new(DemoLog::new(10));
        subject.notify("nobody home");
        subject.subscribe(Box::new(Reader::new("User1")));
        subject.subscribe(Box::new(Reader::new("User2")));
        subject.unsubscribe("User1");
        subject.notify("Weekly newsletter");

        assert_eq!(subject.subscriber_count(), 1);
        assert_eq!(subject.notification_count(), 2);
        let log = subject.log().lines();
        assert!(log[0].ends_with("Sent \"nobody home\" to 0 subscribers"));
        assert!(log[3].ends_with("User1 unsubscribed"));
        assert!(log[4].ends_with("Sent \"Weekly newsletter\" to 1 subscribers automatically"));
    }

    #[test]
    fn manual_manager_counts_each_channel_by_hand() {
        let mut manager = ManualNotificationManager::new(DemoLog::default());
        let subscribers = [
            ("User1", true, false),
            ("User2", true, true),
            ("User3", false, false),
        ];
        for (id, sms, push) in subscribers {
            manager.add_subscriber(ManualSubscriber {
                id: id.to_string(),
                email: format!("{}@example.com", id.to_lowercase()),
                sms,
                push,
            });
        }
        manager.send("Flash sale alert!");
        assert_eq!(manager.attempt_count(), 1);
        assert!(manager.log().last().unwrap().ends_with(
            "Manual send: \"Flash sale alert!\" (3 emails, 2 SMS, 1 push) - lots of manual logic!"
        ));
        manager.remove_subscriber("User2");
        assert_eq!(manager.subscriber_count(), 2);
    }

    #[test]
    fn demo_logs_keep_the_last_five_entries() {
        let mut demo = DemoSession::start("observer", &DemoConfig::seeded(9)).unwrap();
        demo.run(["subscribe"; 8]).unwrap();
        demo.run(["notify"]).unwrap();
        let panel = lines(&demo, "Observer Pattern");
        assert_eq!(panel[0], "Subscribers: 8");
        assert_eq!(panel[1], "Notifications sent: 1");
        assert_eq!(panel.len(), 2 + 5);
        assert!(panel[6].contains("to 8 subscribers automatically"));
    }

    #[test]
    fn seeded_demos_pick_the_same_users() {
        let config = DemoConfig::seeded(21);
        let mut first = DemoSession::start("observer", &config).unwrap();
        let mut second = DemoSession::start("observer", &config).unwrap();
        for demo in [&mut first, &mut second] {
            demo.run(["manual-subscribe", "manual-subscribe", "manual-notify"])
                .unwrap();
        }
        let strip = |lines: Vec<String>| -> Vec<String> {
            lines
                .into_iter()
                .map(|line| line.split("] ").nth(1).unwrap_or(line.as_str()).to_string())
                .collect()
        };
        assert_eq!(
            strip(lines(&first, "Manual Notifications")),
            strip(lines(&second, "Manual Notifications"))
        );
    }

    #[test]
    fn maintenance_and_reset() {
        let mut demo = DemoSession::start("observer", &DemoConfig::seeded(1)).unwrap();
        demo.run(["subscribe", "maintenance"]).unwrap();
        assert_eq!(lines(&demo, "Maintenance: Manual").len(), 13);
        assert_eq!(lines(&demo, "Maintenance: Observer").len(), 6);

        demo.run(["reset"]).unwrap();
        assert_eq!(demo.view().len(), 2);
        assert_eq!(
            lines(&demo, "Observer Pattern"),
            vec!["Subscribers: 0", "Notifications sent: 0"]
        );
    }
}
