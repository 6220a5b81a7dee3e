//! Pattern entries and the compiled-in canonical catalog.
//!
//! The catalog is plain static data: declaration order is navigation order,
//! and identifiers double as route slugs. Use `PatternIndex` for lookups and
//! neighbor resolution; use `CatalogDocument` when the catalog needs to leave
//! the process as JSON.

use crate::catalog::identity::PatternCategory;
use crate::catalog::identity::PatternCategory::{Behavioral, Creational, Structural};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Navigation metadata for one design pattern.
pub struct PatternEntry {
    pub identifier: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub category: PatternCategory,
    #[serde(default)]
    pub intent: Cow<'static, str>,
}

impl PatternEntry {
    pub fn new(
        identifier: impl Into<Cow<'static, str>>,
        title: impl Into<Cow<'static, str>>,
        category: PatternCategory,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            category,
            intent: Cow::Borrowed(""),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

const fn entry(
    identifier: &'static str,
    title: &'static str,
    category: PatternCategory,
    intent: &'static str,
) -> PatternEntry {
    PatternEntry {
        identifier: Cow::Borrowed(identifier),
        title: Cow::Borrowed(title),
        category,
        intent: Cow::Borrowed(intent),
    }
}

// Order matches the home page: category groups in sequence.
static PATTERNS: [PatternEntry; 23] = [
    entry(
        "singleton",
        "Singleton",
        Creational,
        "Ensure a class has only one instance and provide a global access point.",
    ),
    entry(
        "factory-method",
        "Factory Method",
        Creational,
        "Define an interface for creating an object, but let subclasses decide which class to instantiate.",
    ),
    entry(
        "abstract-factory",
        "Abstract Factory",
        Creational,
        "Provides an interface for creating families of related or dependent objects without specifying their concrete classes.",
    ),
    entry(
        "builder",
        "Builder",
        Creational,
        "Separate the construction of a complex object from its representation so that the same construction process can create different representations.",
    ),
    entry(
        "prototype",
        "Prototype",
        Creational,
        "Specify the kinds of objects to create using a prototypical instance, and create new objects by copying this prototype.",
    ),
    entry(
        "adapter",
        "Adapter",
        Structural,
        "Convert the interface of a class into another interface clients expect. Adapter lets classes work together that couldn't otherwise due to incompatible interfaces.",
    ),
    entry(
        "bridge",
        "Bridge",
        Structural,
        "Decouple an abstraction from its implementation so that the two can vary independently.",
    ),
    entry(
        "composite",
        "Composite",
        Structural,
        "Compose objects into tree structures to represent part-whole hierarchies. Composite lets clients treat individual objects and compositions uniformly.",
    ),
    entry(
        "decorator",
        "Decorator",
        Structural,
        "Attach additional responsibilities to an object dynamically. Decorators provide a flexible alternative to subclassing for extending functionality.",
    ),
    entry(
        "facade",
        "Facade",
        Structural,
        "Provide a unified interface to a set of interfaces in a subsystem. Facade defines a higher-level interface that makes the subsystem easier to use.",
    ),
    entry(
        "flyweight",
        "Flyweight",
        Structural,
        "Use sharing to support large numbers of fine-grained objects efficiently. Flyweight reduces memory usage by sharing common data between similar objects.",
    ),
    entry(
        "proxy",
        "Proxy",
        Structural,
        "Provide a surrogate or placeholder for another object to control access to it. Useful for lazy loading, access control, logging, etc.",
    ),
    entry(
        "chain-of-responsibility",
        "Chain of Responsibility",
        Behavioral,
        "Avoid coupling the sender of a request to its receiver by giving more than one object a chance to handle the request.",
    ),
    entry(
        "command",
        "Command",
        Behavioral,
        "Encapsulate a request as an object, thereby letting you parameterize clients with different requests.",
    ),
    entry(
        "interpreter",
        "Interpreter",
        Behavioral,
        "Given a language, define a representation for its grammar along with an interpreter that uses the representation to interpret sentences in the language.",
    ),
    entry(
        "iterator",
        "Iterator",
        Behavioral,
        "Provide a way to access the elements of an aggregate object sequentially without exposing its underlying representation.",
    ),
    entry(
        "mediator",
        "Mediator",
        Behavioral,
        "Defines an object that encapsulates how a set of objects interact.",
    ),
    entry(
        "memento",
        "Memento",
        Behavioral,
        "Without violating encapsulation, capture and externalize an object's internal state so that the object can be restored to that state later.",
    ),
    entry(
        "observer",
        "Observer",
        Behavioral,
        "Defines a one-to-many dependency between objects so that when one object changes state, all its dependents are notified and updated automatically.",
    ),
    entry(
        "state",
        "State",
        Behavioral,
        "Allows an object to alter its behavior when its internal state changes. The object will appear to change its class.",
    ),
    entry(
        "strategy",
        "Strategy",
        Behavioral,
        "Defines a family of algorithms, encapsulates each one, and makes them interchangeable.",
    ),
    entry(
        "template-method",
        "Template Method",
        Behavioral,
        "Defines the skeleton of an algorithm in the base class and lets subclasses override specific steps.",
    ),
    entry(
        "visitor",
        "Visitor",
        Behavioral,
        "Lets you define a new operation without changing the classes of the elements on which it operates.",
    ),
];

/// The canonical catalog in navigation order.
pub fn patterns() -> &'static [PatternEntry] {
    &PATTERNS
}
