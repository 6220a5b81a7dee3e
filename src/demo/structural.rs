//! Structural demos: adapter, bridge, composite, decorator, facade,
//! flyweight, proxy.

use crate::demo::{Action, ActionSpec, Demo, DemoConfig, DemoError, DemoLog, Panel};
use rand::Rng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Adapter

/// The one interface the checkout code talks to.
pub trait PaymentProcessor {
    fn provider(&self) -> &'static str;
    /// Translate a charge into the provider's own request body.
    fn payment_request(&self, amount: f64, currency: &str) -> Value;
}

/// Stripe wants integer cents and a lower-case currency code.
pub struct StripeAdapter;

/// PayPal wants the total as a string and an upper-case currency code.
pub struct PayPalAdapter;

impl PaymentProcessor for StripeAdapter {
    fn provider(&self) -> &'static str {
        "Stripe"
    }

    fn payment_request(&self, amount: f64, currency: &str) -> Value {
        let cents = (amount * 100.0).round() as u64;
        json!({ "amount": cents, "currency": currency.to_lowercase() })
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn provider(&self) -> &'static str {
        "PayPal"
    }

    fn payment_request(&self, amount: f64, currency: &str) -> Value {
        json!({ "currency_code": currency.to_uppercase(), "total": amount.to_string() })
    }
}

pub const DEFAULT_AMOUNT: f64 = 25.0;
/// Largest charge in dollars; keeps the cent amount exact for Stripe.
pub const MAX_AMOUNT: f64 = 1_000_000.0;
const CHECKOUT_CURRENCY: &str = "USD";

const ADAPTER_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("pay", "<stripe|paypal>", "Charge the current amount through a provider"),
    ActionSpec::with("amount", "<amount>", "Set the amount in dollars"),
];

pub struct AdapterDemo {
    amount: f64,
    payments: DemoLog,
}

impl AdapterDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            payments: config.log(),
        }
    }

    fn parse_amount(&self, action: &Action) -> Result<f64, DemoError> {
        let raw = action.required_argument(self.pattern())?;
        match raw.trim().parse::<f64>() {
            Ok(amount) if amount > 0.0 && amount <= MAX_AMOUNT => Ok(amount),
            _ => Err(DemoError::InvalidArgument {
                pattern: self.pattern(),
                action: action.name.clone(),
                value: raw.to_string(),
                expected: format!("a positive amount up to {MAX_AMOUNT}"),
            }),
        }
    }
}

impl Demo for AdapterDemo {
    fn pattern(&self) -> &'static str {
        "adapter"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        ADAPTER_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "amount" => self.amount = self.parse_amount(action)?,
            "pay" => {
                let processor: &dyn PaymentProcessor =
                    match action.argument_in(self.pattern(), &["stripe", "paypal"])? {
                        "stripe" => &StripeAdapter,
                        _ => &PayPalAdapter,
                    };
                let request = processor.payment_request(self.amount, CHECKOUT_CURRENCY);
                self.payments.push(format!(
                    "✅ Paid ${} via {}: {request}",
                    self.amount,
                    processor.provider()
                ));
            }
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::single("Amount", format!("${} {CHECKOUT_CURRENCY}", self.amount)),
            Panel::new("Payments", self.payments.lines()),
        ]
    }

    fn reset(&mut self) {
        self.amount = DEFAULT_AMOUNT;
        self.payments.clear();
    }
}

// ---------------------------------------------------------------------------
// Bridge

pub trait Renderer {
    fn render_circle(&self, radius: u32) -> String;
}

pub struct SvgRenderer;
pub struct CanvasRenderer;

impl Renderer for SvgRenderer {
    fn render_circle(&self, radius: u32) -> String {
        format!("<svg><circle r=\"{radius}\" /></svg>")
    }
}

impl Renderer for CanvasRenderer {
    fn render_circle(&self, radius: u32) -> String {
        format!("Canvas circle with radius {radius}")
    }
}

/// Abstraction side of the bridge; drawing is delegated to the renderer.
pub struct BridgedCircle<'r> {
    radius: u32,
    renderer: &'r dyn Renderer,
}

impl<'r> BridgedCircle<'r> {
    pub fn new(radius: u32, renderer: &'r dyn Renderer) -> Self {
        Self { radius, renderer }
    }

    pub fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }
}

const BRIDGE_ACTIONS: &[ActionSpec] = &[ActionSpec::with(
    "draw",
    "<svg|canvas>",
    "Draw a radius-10 circle with the chosen renderer",
)];

#[derive(Default)]
pub struct BridgeDemo {
    output: Option<String>,
}

impl BridgeDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for BridgeDemo {
    fn pattern(&self) -> &'static str {
        "bridge"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        BRIDGE_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "draw" {
            return Err(action.unknown(self.pattern()));
        }
        let renderer: &dyn Renderer =
            match action.argument_in(self.pattern(), &["svg", "canvas"])? {
                "svg" => &SvgRenderer,
                _ => &CanvasRenderer,
            };
        self.output = Some(BridgedCircle::new(10, renderer).draw());
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Output", self.output.iter().cloned().collect())]
    }

    fn reset(&mut self) {
        self.output = None;
    }
}

// ---------------------------------------------------------------------------
// Composite

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsNode {
    File(String),
    Folder { name: String, children: Vec<FsNode> },
}

impl FsNode {
    pub fn file(name: &str) -> Self {
        FsNode::File(name.to_string())
    }

    pub fn folder(name: &str, children: Vec<FsNode>) -> Self {
        FsNode::Folder {
            name: name.to_string(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsNode::File(name) | FsNode::Folder { name, .. } => name,
        }
    }

    /// One line per node, children indented two spaces under their folder.
    pub fn display(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.display_into("", &mut lines);
        lines
    }

    fn display_into(&self, indent: &str, lines: &mut Vec<String>) {
        match self {
            FsNode::File(name) => lines.push(format!("{indent}- File: {name}")),
            FsNode::Folder { name, children } => {
                lines.push(format!("{indent}+ Folder: {name}"));
                let nested = format!("{indent}  ");
                for child in children {
                    child.display_into(&nested, lines);
                }
            }
        }
    }
}

pub fn sample_tree() -> FsNode {
    FsNode::folder(
        "root",
        vec![
            FsNode::folder(
                "src",
                vec![FsNode::file("index.tsx"), FsNode::file("style.css")],
            ),
            FsNode::folder("dist", vec![FsNode::file("main.js")]),
        ],
    )
}

const COMPOSITE_ACTIONS: &[ActionSpec] =
    &[ActionSpec::bare("render", "Render the sample file tree")];

#[derive(Default)]
pub struct CompositeDemo {
    output: Vec<String>,
}

impl CompositeDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for CompositeDemo {
    fn pattern(&self) -> &'static str {
        "composite"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        COMPOSITE_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "render" => self.output = sample_tree().display(),
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("File tree", self.output.clone())]
    }

    fn reset(&mut self) {
        self.output.clear();
    }
}

// ---------------------------------------------------------------------------
// Decorator

pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

pub struct BasicCoffee;

pub struct Milk<C>(pub C);

pub struct Sugar<C>(pub C);

impl Coffee for BasicCoffee {
    fn cost(&self) -> u32 {
        5
    }

    fn description(&self) -> String {
        "Basic Coffee".to_string()
    }
}

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> u32 {
        self.0.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.0.description())
    }
}

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> u32 {
        self.0.cost() + 1
    }

    fn description(&self) -> String {
        format!("{}, Sugar", self.0.description())
    }
}

const DECORATOR_ACTIONS: &[ActionSpec] =
    &[ActionSpec::bare("decorate", "Wrap a basic coffee with milk and sugar")];

#[derive(Default)]
pub struct DecoratorDemo {
    result: Option<String>,
}

impl DecoratorDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for DecoratorDemo {
    fn pattern(&self) -> &'static str {
        "decorator"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        DECORATOR_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "decorate" {
            return Err(action.unknown(self.pattern()));
        }
        let coffee = Sugar(Milk(BasicCoffee));
        self.result = Some(format!("{} - ${}", coffee.description(), coffee.cost()));
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Order", self.result.iter().cloned().collect())]
    }

    fn reset(&mut self) {
        self.result = None;
    }
}

// ---------------------------------------------------------------------------
// Facade

struct Cpu;
struct Memory;
struct HardDrive;

impl Cpu {
    fn freeze(&self) -> String {
        "Freezing CPU".to_string()
    }

    fn jump(&self, position: u32) -> String {
        format!("Jumping to {position}")
    }

    fn execute(&self) -> String {
        "Executing instructions".to_string()
    }
}

impl Memory {
    fn load(&self, position: u32, data: &str) -> String {
        format!("Loading {data} into position {position}")
    }
}

impl HardDrive {
    fn read(&self, position: u32, size: u32) -> String {
        format!("Reading {size} bytes from position {position}")
    }
}

/// One call that drives the three subsystems through a boot.
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl Default for ComputerFacade {
    fn default() -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            hard_drive: HardDrive,
        }
    }
}

impl ComputerFacade {
    pub fn start(&self) -> Vec<String> {
        vec![
            self.cpu.freeze(),
            self.memory.load(0, "bootloader"),
            self.hard_drive.read(0, 256),
            self.cpu.jump(0),
            self.cpu.execute(),
        ]
    }
}

const FACADE_ACTIONS: &[ActionSpec] =
    &[ActionSpec::bare("start", "Boot the computer through the facade")];

#[derive(Default)]
pub struct FacadeDemo {
    computer: ComputerFacade,
    steps: Vec<String>,
}

impl FacadeDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for FacadeDemo {
    fn pattern(&self) -> &'static str {
        "facade"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        FACADE_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "start" => self.steps = self.computer.start(),
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Boot sequence", self.steps.clone())]
    }

    fn reset(&mut self) {
        self.steps.clear();
    }
}

// ---------------------------------------------------------------------------
// Flyweight

/// Intrinsic state shared by every tree of the same kind.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn render(&self, x: u32, y: u32) -> String {
        format!(
            "🌳 Drawing {} at ({x}, {y}) with {} and {}",
            self.name, self.color, self.texture
        )
    }
}

#[derive(Debug, Default)]
pub struct TreeFactory {
    types: HashMap<String, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn tree_type(&mut self, name: &str, color: &str, texture: &str) -> Rc<TreeType> {
        let key = format!("{name}_{color}_{texture}");
        let shared = self.types.entry(key).or_insert_with(|| {
            tracing::debug!(name, color, texture, "new tree type");
            Rc::new(TreeType {
                name: name.to_string(),
                color: color.to_string(),
                texture: texture.to_string(),
            })
        });
        Rc::clone(shared)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }
}

/// Extrinsic state: where one tree stands.
pub struct Tree {
    x: u32,
    y: u32,
    kind: Rc<TreeType>,
}

impl Tree {
    pub fn draw(&self) -> String {
        self.kind.render(self.x, self.y)
    }
}

pub const FOREST_SIZE: usize = 5;

const FLYWEIGHT_ACTIONS: &[ActionSpec] = &[ActionSpec::bare(
    "plant",
    "Plant five oaks at random spots sharing one tree type",
)];

pub struct FlyweightDemo {
    config: DemoConfig,
    rng: StdRng,
    factory: TreeFactory,
    forest: Vec<Tree>,
    planted: usize,
}

impl FlyweightDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            config: *config,
            rng: config.rng(),
            factory: TreeFactory::default(),
            forest: Vec::new(),
            planted: 0,
        }
    }

    fn plant(&mut self) {
        self.forest = (0..FOREST_SIZE)
            .map(|_| Tree {
                x: self.rng.gen_range(0..100),
                y: self.rng.gen_range(0..100),
                kind: self.factory.tree_type("Oak", "Green", "Rough"),
            })
            .collect();
        self.planted += self.forest.len();
    }
}

impl Demo for FlyweightDemo {
    fn pattern(&self) -> &'static str {
        "flyweight"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        FLYWEIGHT_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "plant" => self.plant(),
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::new(
                "Memory",
                vec![
                    format!("Trees planted: {}", self.planted),
                    format!("Shared tree types: {}", self.factory.len()),
                ],
            ),
            Panel::new("Forest", self.forest.iter().map(Tree::draw).collect()),
        ]
    }

    fn reset(&mut self) {
        let config = self.config;
        *self = Self::new(&config);
    }
}

// ---------------------------------------------------------------------------
// Proxy

pub trait Image {
    fn display(&mut self) -> String;
}

pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Reading from disk happens here, once per real image.
    pub fn load(filename: &str, events: &mut Vec<String>) -> Self {
        events.push(format!("💾 Loading {filename} from disk..."));
        Self {
            filename: filename.to_string(),
        }
    }
}

impl Image for RealImage {
    fn display(&mut self) -> String {
        format!("🖼️ Displaying {}", self.filename)
    }
}

/// Stands in for a `RealImage` and loads it on first display.
pub struct ProxyImage {
    filename: String,
    real: Option<RealImage>,
    disk_reads: usize,
    events: Vec<String>,
}

impl ProxyImage {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            real: None,
            disk_reads: 0,
            events: Vec::new(),
        }
    }

    pub fn disk_reads(&self) -> usize {
        self.disk_reads
    }

    /// Lines produced since the last call, load messages included.
    pub fn take_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }
}

impl Image for ProxyImage {
    fn display(&mut self) -> String {
        let real = self.real.get_or_insert_with(|| {
            self.disk_reads += 1;
            RealImage::load(&self.filename, &mut self.events)
        });
        let line = real.display();
        self.events.push(line.clone());
        line
    }
}

pub const PROXY_IMAGE: &str = "design-patterns.png";

const PROXY_ACTIONS: &[ActionSpec] = &[ActionSpec::bare(
    "load",
    "Display the image twice through the proxy",
)];

pub struct ProxyDemo {
    proxy: ProxyImage,
    output: Vec<String>,
}

impl ProxyDemo {
    pub fn new() -> Self {
        Self {
            proxy: ProxyImage::new(PROXY_IMAGE),
            output: Vec::new(),
        }
    }
}

impl Default for ProxyDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for ProxyDemo {
    fn pattern(&self) -> &'static str {
        "proxy"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        PROXY_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "load" {
            return Err(action.unknown(self.pattern()));
        }
        self.proxy.display();
        self.proxy.display();
        self.output = self.proxy.take_events();
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::single("Disk reads", self.proxy.disk_reads().to_string()),
            Panel::new("Output", self.output.clone()),
        ]
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
