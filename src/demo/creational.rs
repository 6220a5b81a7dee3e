//! Creational demos: singleton, factory method, abstract factory, builder,
//! prototype.

use crate::demo::{Action, ActionSpec, Demo, DemoConfig, DemoError, DemoLog, Panel, timestamp};
use std::fmt;

// ---------------------------------------------------------------------------
// Singleton

/// Holds at most one shared instance and counts how many were ever created.
///
/// This is the demo's process-wide state; `reset` empties the slot so the
/// next access creates instance #1 again.
#[derive(Debug)]
pub struct InstanceSlot<T> {
    instance: Option<T>,
    created: usize,
}

impl<T> Default for InstanceSlot<T> {
    fn default() -> Self {
        Self {
            instance: None,
            created: 0,
        }
    }
}

impl<T> InstanceSlot<T> {
    /// Return the shared instance, creating it on first access. `create`
    /// receives the 1-based creation number.
    pub fn get_or_create(&mut self, create: impl FnOnce(usize) -> T) -> &mut T {
        let created = &mut self.created;
        self.instance.get_or_insert_with(|| {
            *created += 1;
            create(*created)
        })
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn reset(&mut self) {
        self.instance = None;
        self.created = 0;
    }
}

#[derive(Debug)]
pub struct ToastManager {
    instance: usize,
    shown: usize,
}

impl ToastManager {
    pub fn new(instance: usize) -> Self {
        Self { instance, shown: 0 }
    }

    pub fn show(&mut self, message: &str) -> String {
        self.shown += 1;
        format!(
            "Toast #{}: {message} (instance #{})",
            self.shown, self.instance
        )
    }
}

const SINGLETON_ACTIONS: &[ActionSpec] = &[
    ActionSpec::bare("get-instance", "Show a toast through the shared ToastManager"),
    ActionSpec::bare("new-instance", "Show a toast through a freshly constructed manager"),
];

pub struct SingletonDemo {
    slot: InstanceSlot<ToastManager>,
    direct_created: usize,
    log: DemoLog,
}

impl SingletonDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            slot: InstanceSlot::default(),
            direct_created: 0,
            log: config.log(),
        }
    }
}

impl Demo for SingletonDemo {
    fn pattern(&self) -> &'static str {
        "singleton"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        SINGLETON_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "get-instance" => {
                let toast = self.slot.get_or_create(ToastManager::new);
                let line = toast.show("Hello from Singleton");
                self.log.push(format!("✅ getInstance() → {line}"));
            }
            "new-instance" => {
                self.direct_created += 1;
                let mut toast = ToastManager::new(self.direct_created);
                let line = toast.show("Hello from Singleton");
                self.log.push(format!("⚠️ new ToastManager() → {line}"));
            }
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::new(
                "Instances",
                vec![
                    format!("Shared instances created: {}", self.slot.created()),
                    format!("Direct instances created: {}", self.direct_created),
                ],
            ),
            Panel::new("Toasts", self.log.lines()),
        ]
    }

    fn reset(&mut self) {
        self.slot.reset();
        self.direct_created = 0;
        self.log.clear();
    }
}

// ---------------------------------------------------------------------------
// Factory Method

pub trait Shape {
    fn draw(&self) -> String;
    fn kind(&self) -> &'static str;
}

macro_rules! shape {
    ($name:ident, $icon:literal) => {
        pub struct $name {
            color: String,
        }

        impl $name {
            pub fn new(color: &str) -> Self {
                Self {
                    color: color.to_string(),
                }
            }
        }

        impl Shape for $name {
            fn draw(&self) -> String {
                format!("Drawing a {} {} {}", self.color, stringify!($name), $icon)
            }

            fn kind(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

shape!(Circle, "🟡");
shape!(Square, "🟦");
shape!(Triangle, "🔺");
shape!(Star, "⭐");

/// Single creation point that knows every shape.
pub struct ShapeFactory;

impl ShapeFactory {
    pub const SUPPORTED: [&'static str; 4] = ["circle", "square", "triangle", "star"];

    pub fn create(kind: &str, color: &str) -> Option<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match kind.to_lowercase().as_str() {
            "circle" => Box::new(Circle::new(color)),
            "square" => Box::new(Square::new(color)),
            "triangle" => Box::new(Triangle::new(color)),
            "star" => Box::new(Star::new(color)),
            _ => return None,
        };
        Some(shape)
    }
}

/// Hard-coded creation written before triangles and stars existed.
pub struct DirectInstantiation;

impl DirectInstantiation {
    pub const SUPPORTED: [&'static str; 2] = ["circle", "square"];

    pub fn create(kind: &str, color: &str) -> Option<Box<dyn Shape>> {
        match kind.to_lowercase().as_str() {
            "circle" => Some(Box::new(Circle::new(color))),
            "square" => Some(Box::new(Square::new(color))),
            _ => None,
        }
    }
}

pub const SHAPE_COLORS: [&str; 5] = ["blue", "red", "green", "yellow", "purple"];

const FACTORY_MAINTENANCE: &[&str] = &[
    "🔍 Request: Add Heart shape support",
    "📝 Step 1: Create Heart class implementing Shape interface",
    "✏️  Step 2: Add 'heart' case to factory switch statement",
    "✅ DONE! Heart shapes work everywhere automatically",
    "🧪 All existing creation code continues to work unchanged",
    "🚀 Zero modifications needed to client code",
];

const DIRECT_MAINTENANCE: &[&str] = &[
    "🔍 Request: Add Heart shape support",
    "📝 Step 1: Create Heart class implementing Shape interface",
    "❌ Step 2: Find and update DrawingApp.createShape() method",
    "❌ Step 3: Find and update GameEngine.createShape() method",
    "❌ Step 4: Find and update UIBuilder.createShape() method",
    "❌ Step 5: Update all 8 other hardcoded creation points",
    "❌ Step 6: Update dropdown menus in 5 different components",
    "❌ Step 7: Update validation logic in form handlers",
    "❌ Step 8: Update documentation and type definitions",
    "⚠️  Step 9: Test every single creation point manually",
    "💥 RISK: Miss one creation point = runtime errors in production",
];

const FACTORY_METHOD_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("color", "<blue|red|green|yellow|purple>", "Pick the color for new shapes"),
    ActionSpec::with("factory", "<shape>", "Create a shape through the factory"),
    ActionSpec::with("direct", "<shape>", "Create a shape with hard-coded construction"),
    ActionSpec::bare("maintenance", "Compare the work needed to add a new shape"),
];

pub struct FactoryMethodDemo {
    color: &'static str,
    factory_log: DemoLog,
    direct_log: DemoLog,
    factory_result: Option<String>,
    direct_result: Option<String>,
    show_maintenance: bool,
}

impl FactoryMethodDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            color: SHAPE_COLORS[0],
            factory_log: config.log(),
            direct_log: config.log(),
            factory_result: None,
            direct_result: None,
            show_maintenance: false,
        }
    }

    fn create_with_factory(&mut self, kind: &str) {
        let stamp = timestamp();
        match ShapeFactory::create(kind, self.color) {
            Some(shape) => {
                self.factory_log.push(format!(
                    "✅ [{stamp}] Factory created {} {}",
                    self.color,
                    shape.kind()
                ));
                self.factory_result = Some(shape.draw());
            }
            None => {
                self.factory_log
                    .push(format!("❌ [{stamp}] Factory: Unknown type '{kind}'"));
                self.factory_result = Some(format!(
                    "Error: Factory: Unsupported shape type: {kind}"
                ));
            }
        }
    }

    fn create_directly(&mut self, kind: &str) {
        let stamp = timestamp();
        match DirectInstantiation::create(kind, self.color) {
            Some(shape) => {
                self.direct_log.push(format!(
                    "✅ [{stamp}] Direct: Created {} {} (hardcoded)",
                    self.color,
                    shape.kind()
                ));
                self.direct_result = Some(shape.draw());
            }
            None => {
                self.direct_log.push(format!(
                    "💥 [{stamp}] Direct: BROKEN! '{kind}' not in hardcoded list"
                ));
                self.direct_result = Some(format!(
                    "💥 BROKEN: Direct: ERROR! '{kind}' not supported in v1.0 code. Need to modify every creation point!"
                ));
            }
        }
    }
}

impl Demo for FactoryMethodDemo {
    fn pattern(&self) -> &'static str {
        "factory-method"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        FACTORY_METHOD_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "color" => self.color = action.argument_in(self.pattern(), &SHAPE_COLORS)?,
            "factory" => {
                let kind = action.required_argument(self.pattern())?.to_string();
                self.create_with_factory(&kind);
            }
            "direct" => {
                let kind = action.required_argument(self.pattern())?.to_string();
                self.create_directly(&kind);
            }
            "maintenance" => self.show_maintenance = true,
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        let mut factory = vec![format!("Supported: {}", ShapeFactory::SUPPORTED.join(", "))];
        factory.extend(self.factory_result.clone());
        factory.extend(self.factory_log.lines());

        let mut direct = vec![format!(
            "Supported: {}",
            DirectInstantiation::SUPPORTED.join(", ")
        )];
        direct.extend(self.direct_result.clone());
        direct.extend(self.direct_log.lines());

        let mut panels = vec![
            Panel::single("Color", self.color),
            Panel::new("Factory Method", factory),
            Panel::new("Direct Instantiation", direct),
        ];
        if self.show_maintenance {
            panels.push(Panel::new("Maintenance: Factory Method", owned(FACTORY_MAINTENANCE)));
            panels.push(Panel::new(
                "Maintenance: Direct Instantiation",
                owned(DIRECT_MAINTENANCE),
            ));
        }
        panels
    }

    fn reset(&mut self) {
        self.color = SHAPE_COLORS[0];
        self.factory_log.clear();
        self.direct_log.clear();
        self.factory_result = None;
        self.direct_result = None;
        self.show_maintenance = false;
    }
}

pub(crate) fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Abstract Factory

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

/// Creates one consistent family of widgets.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct LightButton;
struct LightCheckbox;
struct DarkButton;
struct DarkCheckbox;

impl Button for LightButton {
    fn render(&self) -> String {
        "🟦 Light Button".to_string()
    }
}

impl Checkbox for LightCheckbox {
    fn render(&self) -> String {
        "☑️ Light Checkbox".to_string()
    }
}

impl Button for DarkButton {
    fn render(&self) -> String {
        "⬛ Dark Button".to_string()
    }
}

impl Checkbox for DarkCheckbox {
    fn render(&self) -> String {
        "🔲 Dark Checkbox".to_string()
    }
}

pub struct LightThemeFactory;
pub struct DarkThemeFactory;

impl GuiFactory for LightThemeFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox)
    }
}

impl GuiFactory for DarkThemeFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn factory(self) -> Box<dyn GuiFactory> {
        match self {
            Theme::Light => Box::new(LightThemeFactory),
            Theme::Dark => Box::new(DarkThemeFactory),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

const ABSTRACT_FACTORY_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("theme", "<light|dark>", "Choose the widget family"),
    ActionSpec::bare("create", "Create a button and checkbox from the current family"),
];

pub struct AbstractFactoryDemo {
    theme: Theme,
    rendered: Vec<String>,
}

impl AbstractFactoryDemo {
    pub fn new() -> Self {
        Self {
            theme: Theme::Light,
            rendered: Vec::new(),
        }
    }
}

impl Default for AbstractFactoryDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for AbstractFactoryDemo {
    fn pattern(&self) -> &'static str {
        "abstract-factory"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        ABSTRACT_FACTORY_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "theme" => {
                self.theme = match action.argument_in(self.pattern(), &["light", "dark"])? {
                    "dark" => Theme::Dark,
                    _ => Theme::Light,
                };
            }
            "create" => {
                let factory = self.theme.factory();
                self.rendered = vec![
                    factory.create_button().render(),
                    factory.create_checkbox().render(),
                ];
            }
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::single("Theme", self.theme.to_string()),
            Panel::new("Widgets", self.rendered.clone()),
        ]
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Builder

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Burger {
    ingredients: Vec<String>,
}

impl fmt::Display for Burger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Burger with: {}", self.ingredients.join(", "))
    }
}

#[derive(Debug, Default)]
pub struct BurgerBuilder {
    ingredients: Vec<String>,
}

impl BurgerBuilder {
    pub fn add_ingredient(&mut self, ingredient: impl Into<String>) -> &mut Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Finish the burger; `None` when nothing was added.
    pub fn build(&mut self) -> Option<Burger> {
        if self.ingredients.is_empty() {
            return None;
        }
        Some(Burger {
            ingredients: std::mem::take(&mut self.ingredients),
        })
    }
}

const BUILDER_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("add", "<ingredient>", "Add an ingredient (cheese, lettuce, tomato, ...)"),
    ActionSpec::bare("build", "Build the burger and start a new one"),
];

pub struct BuilderDemo {
    builder: BurgerBuilder,
    result: Option<Burger>,
    notices: DemoLog,
}

impl BuilderDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            builder: BurgerBuilder::default(),
            result: None,
            notices: config.log(),
        }
    }
}

impl Demo for BuilderDemo {
    fn pattern(&self) -> &'static str {
        "builder"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        BUILDER_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "add" => {
                let ingredient = action.required_argument(self.pattern())?.trim();
                if ingredient.is_empty() {
                    return Err(DemoError::InvalidArgument {
                        pattern: self.pattern(),
                        action: action.name.clone(),
                        value: String::new(),
                        expected: "an ingredient name".to_string(),
                    });
                }
                self.builder.add_ingredient(ingredient);
                self.result = None;
                self.notices.push(format!("{ingredient} added"));
            }
            "build" => match self.builder.build() {
                Some(burger) => self.result = Some(burger),
                None => self
                    .notices
                    .push("Please add ingredients before building the burger."),
            },
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        let mut panels = vec![Panel::single(
            "In progress",
            format!("Ingredients: {}", self.builder.ingredients.join(", ")),
        )];
        if let Some(burger) = &self.result {
            panels.push(Panel::single("Result", burger.to_string()));
        }
        panels.push(Panel::new("Notices", self.notices.lines()));
        panels
    }

    fn reset(&mut self) {
        self.builder = BurgerBuilder::default();
        self.result = None;
        self.notices.clear();
    }
}

// ---------------------------------------------------------------------------
// Prototype

/// Shapes that can copy themselves without the caller knowing the concrete type.
pub trait ShapePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype>;
    fn draw(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CirclePrototype {
    pub radius: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectanglePrototype {
    pub width: u32,
    pub height: u32,
}

impl ShapePrototype for CirclePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Circle with radius {}", self.radius)
    }
}

impl ShapePrototype for RectanglePrototype {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Rectangle {}x{}", self.width, self.height)
    }
}

const PROTOTYPE_ACTIONS: &[ActionSpec] = &[ActionSpec::with(
    "clone",
    "<circle|rectangle>",
    "Clone one of the prototype shapes",
)];

pub struct PrototypeDemo {
    circle: CirclePrototype,
    rectangle: RectanglePrototype,
    output: Option<String>,
    clones: usize,
}

impl PrototypeDemo {
    pub fn new() -> Self {
        Self {
            circle: CirclePrototype { radius: 10 },
            rectangle: RectanglePrototype {
                width: 20,
                height: 30,
            },
            output: None,
            clones: 0,
        }
    }
}

impl Default for PrototypeDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for PrototypeDemo {
    fn pattern(&self) -> &'static str {
        "prototype"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        PROTOTYPE_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "clone" {
            return Err(action.unknown(self.pattern()));
        }
        let original: &dyn ShapePrototype =
            match action.argument_in(self.pattern(), &["circle", "rectangle"])? {
                "circle" => &self.circle,
                _ => &self.rectangle,
            };
        let copy = original.clone_box();
        self.output = Some(copy.draw());
        self.clones += 1;
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        let mut lines = vec![format!("Clones made: {}", self.clones)];
        lines.extend(self.output.clone());
        vec![Panel::new("Clone", lines)]
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
