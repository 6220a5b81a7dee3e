//! Interactive demos, one per catalog pattern.
//!
//! Each demo owns a tiny object model for its pattern and exposes it through
//! the `Demo` trait: a fixed action vocabulary, a `perform` step per user
//! action, and a `view` of the panels a page would show. Demos never talk to
//! each other or to the catalog; `create` is the only place that maps a
//! catalog identifier to a demo.
//!
//! Refusals that belong to the lesson (building an empty burger, asking the
//! legacy creator for a shape it does not know) are recorded in the demo's
//! own output. `DemoError` is reserved for actions the demo cannot interpret.

pub mod behavioral;
pub mod creational;
pub mod log;
pub mod observer;
pub mod strategy;
pub mod structural;

pub use log::{DEFAULT_LOG_CAPACITY, DemoLog, MAX_LOG_CAPACITY, timestamp};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Action every demo understands; restores the initial state.
pub const RESET_ACTION: &str = "reset";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("empty demo action")]
    EmptyAction,
    #[error("no demo for pattern '{0}'")]
    UnknownPattern(String),
    #[error("{pattern} demo has no action '{action}'")]
    UnknownAction {
        pattern: &'static str,
        action: String,
    },
    #[error("{pattern} action '{action}' needs an argument ({action}:<value>)")]
    MissingArgument {
        pattern: &'static str,
        action: String,
    },
    #[error("{pattern} action '{action}' does not accept '{value}' (expected {expected})")]
    InvalidArgument {
        pattern: &'static str,
        action: String,
        value: String,
        expected: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One user interaction: an action name plus an optional argument.
///
/// Written as `name` or `name:argument`; only the first `:` separates, so
/// arguments may contain colons.
pub struct Action {
    pub name: String,
    pub argument: Option<String>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    pub fn with_argument(name: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: Some(argument.into()),
        }
    }

    /// The argument, or `MissingArgument` naming this action.
    pub fn required_argument(&self, pattern: &'static str) -> Result<&str, DemoError> {
        self.argument
            .as_deref()
            .ok_or_else(|| DemoError::MissingArgument {
                pattern,
                action: self.name.clone(),
            })
    }

    /// The argument, restricted to one of `allowed`.
    pub fn argument_in<'a>(
        &self,
        pattern: &'static str,
        allowed: &[&'a str],
    ) -> Result<&'a str, DemoError> {
        let value = self.required_argument(pattern)?;
        allowed
            .iter()
            .copied()
            .find(|candidate| *candidate == value)
            .ok_or_else(|| DemoError::InvalidArgument {
                pattern,
                action: self.name.clone(),
                value: value.to_string(),
                expected: format!("one of {}", allowed.join(", ")),
            })
    }

    pub fn unknown(&self, pattern: &'static str) -> DemoError {
        DemoError::UnknownAction {
            pattern,
            action: self.name.clone(),
        }
    }
}

impl FromStr for Action {
    type Err = DemoError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (name, argument) = match input.split_once(':') {
            Some((name, argument)) => (name.trim(), Some(argument.to_string())),
            None => (input, None),
        };
        if name.is_empty() {
            return Err(DemoError::EmptyAction);
        }
        Ok(Self {
            name: name.to_string(),
            argument,
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{}:{argument}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Entry in a demo's action vocabulary.
pub struct ActionSpec {
    pub name: &'static str,
    /// Placeholder for the argument, e.g. `<svg|canvas>`; `None` when the
    /// action takes no argument.
    pub argument: Option<&'static str>,
    pub summary: &'static str,
}

impl ActionSpec {
    pub const fn bare(name: &'static str, summary: &'static str) -> Self {
        Self {
            name,
            argument: None,
            summary,
        }
    }

    pub const fn with(name: &'static str, argument: &'static str, summary: &'static str) -> Self {
        Self {
            name,
            argument: Some(argument),
            summary,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A titled block of output lines, the unit a page renders.
pub struct Panel {
    pub title: String,
    pub lines: Vec<String>,
}

impl Panel {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    pub fn single(title: impl Into<String>, line: impl Into<String>) -> Self {
        Self::new(title, vec![line.into()])
    }
}

/// Capability shared by every pattern demo.
pub trait Demo {
    /// Catalog identifier of the pattern this demo illustrates.
    fn pattern(&self) -> &'static str;

    fn actions(&self) -> &'static [ActionSpec];

    fn perform(&mut self, action: &Action) -> Result<(), DemoError>;

    /// Current visible output.
    fn view(&self) -> Vec<Panel>;

    /// Discard demo-local state, including demo-wide counters and logs.
    fn reset(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Knobs shared by all demos.
pub struct DemoConfig {
    pub log_capacity: usize,
    /// Seed for the demo random source; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_capacity: DEFAULT_LOG_CAPACITY,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn log(&self) -> DemoLog {
        DemoLog::new(self.log_capacity)
    }
}

/// Build the demo for a catalog identifier.
pub fn create(identifier: &str, config: &DemoConfig) -> Option<Box<dyn Demo>> {
    use crate::demo::{behavioral::*, creational::*, structural::*};

    let demo: Box<dyn Demo> = match identifier {
        "singleton" => Box::new(SingletonDemo::new(config)),
        "factory-method" => Box::new(FactoryMethodDemo::new(config)),
        "abstract-factory" => Box::new(AbstractFactoryDemo::new()),
        "builder" => Box::new(BuilderDemo::new(config)),
        "prototype" => Box::new(PrototypeDemo::new()),
        "adapter" => Box::new(AdapterDemo::new(config)),
        "bridge" => Box::new(BridgeDemo::new()),
        "composite" => Box::new(CompositeDemo::new()),
        "decorator" => Box::new(DecoratorDemo::new()),
        "facade" => Box::new(FacadeDemo::new()),
        "flyweight" => Box::new(FlyweightDemo::new(config)),
        "proxy" => Box::new(ProxyDemo::new()),
        "chain-of-responsibility" => Box::new(ChainOfResponsibilityDemo::new(config)),
        "command" => Box::new(CommandDemo::new(config)),
        "interpreter" => Box::new(InterpreterDemo::new(config)),
        "iterator" => Box::new(IteratorDemo::new()),
        "mediator" => Box::new(MediatorDemo::new(config)),
        "memento" => Box::new(MementoDemo::new()),
        "observer" => Box::new(observer::ObserverDemo::new(config)),
        "state" => Box::new(StateDemo::new(config)),
        "strategy" => Box::new(strategy::StrategyDemo::new(config)),
        "template-method" => Box::new(TemplateMethodDemo::new()),
        "visitor" => Box::new(VisitorDemo::new()),
        _ => return None,
    };
    Some(demo)
}

/// A demo plus the actions applied to it so far.
pub struct DemoSession {
    demo: Box<dyn Demo>,
    transcript: Vec<Action>,
}

impl DemoSession {
    pub fn start(identifier: &str, config: &DemoConfig) -> Result<Self, DemoError> {
        let demo = create(identifier, config)
            .ok_or_else(|| DemoError::UnknownPattern(identifier.to_string()))?;
        Ok(Self {
            demo,
            transcript: Vec::new(),
        })
    }

    pub fn pattern(&self) -> &'static str {
        self.demo.pattern()
    }

    pub fn actions(&self) -> &'static [ActionSpec] {
        self.demo.actions()
    }

    /// Apply one action; `reset` is routed to `Demo::reset`.
    pub fn apply(&mut self, action: &Action) -> Result<(), DemoError> {
        tracing::debug!(pattern = self.demo.pattern(), %action, "demo action");
        if action.name == RESET_ACTION {
            self.demo.reset();
        } else {
            self.demo.perform(action)?;
        }
        self.transcript.push(action.clone());
        Ok(())
    }

    /// Parse and apply `name[:argument]` steps in order, stopping at the
    /// first failure.
    pub fn run<I, S>(&mut self, steps: I) -> Result<(), DemoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for step in steps {
            let action: Action = step.as_ref().parse()?;
            self.apply(&action)?;
        }
        Ok(())
    }

    pub fn view(&self) -> Vec<Panel> {
        self.demo.view()
    }

    pub fn transcript(&self) -> &[Action] {
        &self.transcript
    }
}
