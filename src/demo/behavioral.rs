//! Behavioral demos except observer and strategy, which compare the pattern
//! against a hand-rolled alternative and live in their own modules.

use crate::demo::{Action, ActionSpec, Demo, DemoConfig, DemoError, DemoLog, Panel};
use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Chain of Responsibility

pub trait Handler {
    /// Reply when this handler owns `request`.
    fn process(&self, request: &str) -> Option<String>;

    fn successor(&self) -> Option<&dyn Handler>;

    /// Walk the chain until some handler answers.
    fn handle(&self, request: &str) -> Option<String> {
        self.process(request)
            .or_else(|| self.successor()?.handle(request))
    }
}

/// Handles exactly one request keyword, otherwise passes it on.
pub struct KeywordHandler {
    keyword: &'static str,
    reply: &'static str,
    next: Option<Box<dyn Handler>>,
}

impl KeywordHandler {
    pub fn new(keyword: &'static str, reply: &'static str) -> Self {
        Self {
            keyword,
            reply,
            next: None,
        }
    }

    pub fn then(mut self, next: impl Handler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl Handler for KeywordHandler {
    fn process(&self, request: &str) -> Option<String> {
        (request == self.keyword).then(|| self.reply.to_string())
    }

    fn successor(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

pub const UNHANDLED_REQUEST: &str = "No handler could process the request";

/// auth → log → data
pub fn request_chain() -> KeywordHandler {
    KeywordHandler::new("auth", "✅ Authentication successful").then(
        KeywordHandler::new("log", "📋 Logged request")
            .then(KeywordHandler::new("data", "📦 Data processed")),
    )
}

const CHAIN_ACTIONS: &[ActionSpec] = &[ActionSpec::with(
    "request",
    "<text>",
    "Send a request (auth, log, data, ...) down the chain",
)];

pub struct ChainOfResponsibilityDemo {
    chain: KeywordHandler,
    results: DemoLog,
}

impl ChainOfResponsibilityDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            chain: request_chain(),
            results: config.log(),
        }
    }
}

impl Demo for ChainOfResponsibilityDemo {
    fn pattern(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        CHAIN_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "request" {
            return Err(action.unknown(self.pattern()));
        }
        let request = action.required_argument(self.pattern())?.trim();
        let reply = self
            .chain
            .handle(request)
            .unwrap_or_else(|| UNHANDLED_REQUEST.to_string());
        self.results.push(reply);
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Results", self.results.lines())]
    }

    fn reset(&mut self) {
        self.results.clear();
    }
}

// ---------------------------------------------------------------------------
// Command

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn is_on(&self) -> bool {
        self.on
    }

    fn state(&self) -> &'static str {
        if self.on { "On" } else { "Off" }
    }
}

pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, light: &mut Light);
}

pub struct TurnOn;
pub struct TurnOff;

impl Command for TurnOn {
    fn name(&self) -> &'static str {
        "TurnOnCommand"
    }

    fn execute(&self, light: &mut Light) {
        light.on = true;
    }
}

impl Command for TurnOff {
    fn name(&self) -> &'static str {
        "TurnOffCommand"
    }

    fn execute(&self, light: &mut Light) {
        light.on = false;
    }
}

/// Invoker: runs whatever command is loaded, without knowing what it does.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    /// Name of the command that ran, if one was loaded.
    pub fn press_button(&self, light: &mut Light) -> Option<&'static str> {
        let command = self.command.as_ref()?;
        command.execute(light);
        Some(command.name())
    }
}

const COMMAND_ACTIONS: &[ActionSpec] = &[
    ActionSpec::bare("on", "Load the turn-on command and press the button"),
    ActionSpec::bare("off", "Load the turn-off command and press the button"),
];

pub struct CommandDemo {
    light: Light,
    remote: RemoteControl,
    executed: DemoLog,
}

impl CommandDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            light: Light::default(),
            remote: RemoteControl::default(),
            executed: config.log(),
        }
    }
}

impl Demo for CommandDemo {
    fn pattern(&self) -> &'static str {
        "command"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        COMMAND_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        let command: Box<dyn Command> = match action.name.as_str() {
            "on" => Box::new(TurnOn),
            "off" => Box::new(TurnOff),
            _ => return Err(action.unknown(self.pattern())),
        };
        self.remote.set_command(command);
        if let Some(name) = self.remote.press_button(&mut self.light) {
            self.executed
                .push(format!("{name} → light is {}", self.light.state()));
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::single("Light", self.light.state()),
            Panel::new("Executed", self.executed.lines()),
        ]
    }

    fn reset(&mut self) {
        self.light = Light::default();
        self.remote = RemoteControl::default();
        self.executed.clear();
    }
}

// ---------------------------------------------------------------------------
// Interpreter

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// Matches when the context contains the word.
    Terminal(String),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn terminal(word: &str) -> Self {
        Expression::Terminal(word.to_string())
    }

    pub fn interpret(&self, context: &str) -> bool {
        match self {
            Expression::Terminal(word) => context.contains(word.as_str()),
            Expression::And(left, right) => left.interpret(context) && right.interpret(context),
            Expression::Or(left, right) => left.interpret(context) || right.interpret(context),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    fn as_str(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
        }
    }

    /// `cat <op> dog`
    pub fn expression(self) -> Expression {
        let (cat, dog) = (
            Box::new(Expression::terminal("cat")),
            Box::new(Expression::terminal("dog")),
        );
        match self {
            Operator::And => Expression::And(cat, dog),
            Operator::Or => Expression::Or(cat, dog),
        }
    }
}

const INTERPRETER_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("op", "<or|and>", "Combine the cat and dog terminals with AND or OR"),
    ActionSpec::with("interpret", "<text>", "Evaluate the expression against some text"),
];

pub struct InterpreterDemo {
    operator: Operator,
    result: Option<&'static str>,
    history: DemoLog,
}

impl InterpreterDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            operator: Operator::Or,
            result: None,
            history: config.log(),
        }
    }
}

impl Demo for InterpreterDemo {
    fn pattern(&self) -> &'static str {
        "interpreter"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        INTERPRETER_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "op" => {
                self.operator = match action.argument_in(self.pattern(), &["or", "and"])? {
                    "and" => Operator::And,
                    _ => Operator::Or,
                };
            }
            "interpret" => {
                let input = action.required_argument(self.pattern())?;
                let result = if self.operator.expression().interpret(input) {
                    "✅ Matched!"
                } else {
                    "❌ Not matched"
                };
                self.result = Some(result);
                self.history.push(format!(
                    "\"{input}\" (cat {} dog) → {result}",
                    self.operator.as_str()
                ));
            }
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::single(
                "Expression",
                format!("cat {} dog", self.operator.as_str()),
            ),
            Panel::new("Result", self.result.iter().map(|r| r.to_string()).collect()),
            Panel::new("History", self.history.lines()),
        ]
    }

    fn reset(&mut self) {
        self.operator = Operator::Or;
        self.result = None;
        self.history.clear();
    }
}

// ---------------------------------------------------------------------------
// Iterator

pub struct NameRepository {
    names: Vec<String>,
}

impl Default for NameRepository {
    fn default() -> Self {
        Self {
            names: ["Alice", "Bob", "Charlie", "Diana"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl NameRepository {
    pub fn iter(&self) -> NameIter<'_> {
        NameIter {
            names: &self.names,
            position: 0,
        }
    }
}

/// Cursor over a repository; the collection's layout stays private.
pub struct NameIter<'a> {
    names: &'a [String],
    position: usize,
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let names = self.names;
        let name = names.get(self.position)?;
        self.position += 1;
        Some(name.as_str())
    }
}

impl<'a> IntoIterator for &'a NameRepository {
    type Item = &'a str;
    type IntoIter = NameIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

const ITERATOR_ACTIONS: &[ActionSpec] =
    &[ActionSpec::bare("iterate", "Walk the name repository")];

#[derive(Default)]
pub struct IteratorDemo {
    repository: NameRepository,
    output: Vec<String>,
}

impl IteratorDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for IteratorDemo {
    fn pattern(&self) -> &'static str {
        "iterator"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        ITERATOR_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "iterate" => self.output = self.repository.iter().map(String::from).collect(),
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Names", self.output.clone())]
    }

    fn reset(&mut self) {
        self.output.clear();
    }
}

// ---------------------------------------------------------------------------
// Mediator

#[derive(Debug)]
pub struct ChatUser {
    name: String,
    inbox: Vec<String>,
}

impl ChatUser {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

/// Users only ever talk to the room; the room decides who receives what.
#[derive(Debug, Default)]
pub struct ChatRoom {
    users: Vec<ChatUser>,
}

/// Handle returned by `ChatRoom::join`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserId(usize);

impl ChatRoom {
    pub fn join(&mut self, name: &str) -> UserId {
        self.users.push(ChatUser {
            name: name.to_string(),
            inbox: Vec::new(),
        });
        UserId(self.users.len() - 1)
    }

    /// Deliver `message` to everyone except the sender; returns the
    /// delivered line once per recipient.
    pub fn send(&mut self, sender: UserId, message: &str) -> Vec<String> {
        let Some(from) = self.users.get(sender.0) else {
            return Vec::new();
        };
        let line = format!("{}: {message}", from.name);
        let mut delivered = Vec::new();
        for (index, user) in self.users.iter_mut().enumerate() {
            if index != sender.0 {
                user.inbox.push(line.clone());
                delivered.push(line.clone());
            }
        }
        delivered
    }

    pub fn user(&self, id: UserId) -> Option<&ChatUser> {
        self.users.get(id.0)
    }
}

const MEDIATOR_ACTIONS: &[ActionSpec] = &[ActionSpec::bare(
    "send",
    "Alice and Bob exchange a message through the chat room",
)];

pub struct MediatorDemo {
    config: DemoConfig,
    room: ChatRoom,
    alice: UserId,
    bob: UserId,
    messages: DemoLog,
}

impl MediatorDemo {
    pub fn new(config: &DemoConfig) -> Self {
        let mut room = ChatRoom::default();
        let alice = room.join("Alice");
        let bob = room.join("Bob");
        Self {
            config: *config,
            room,
            alice,
            bob,
            messages: config.log(),
        }
    }
}

impl Demo for MediatorDemo {
    fn pattern(&self) -> &'static str {
        "mediator"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        MEDIATOR_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "send" {
            return Err(action.unknown(self.pattern()));
        }
        for line in self.room.send(self.alice, "Hello Bob!") {
            self.messages.push(line);
        }
        for line in self.room.send(self.bob, "Hey Alice!") {
            self.messages.push(line);
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Chat", self.messages.lines())]
    }

    fn reset(&mut self) {
        let config = self.config;
        *self = Self::new(&config);
    }
}

// ---------------------------------------------------------------------------
// Memento

/// Frozen editor content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot(String);

#[derive(Debug, Default)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn type_text(&mut self, words: &str) {
        self.content.push_str(words);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self) -> Snapshot {
        Snapshot(self.content.clone())
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.content = snapshot.0;
    }
}

#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

const MEMENTO_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("type", "<text>", "Append text, saving a snapshot first"),
    ActionSpec::bare("undo", "Restore the most recent snapshot"),
];

#[derive(Default)]
pub struct MementoDemo {
    editor: TextEditor,
    history: History,
    notice: Option<&'static str>,
}

impl MementoDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for MementoDemo {
    fn pattern(&self) -> &'static str {
        "memento"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        MEMENTO_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        self.notice = None;
        match action.name.as_str() {
            "type" => {
                let words = action.required_argument(self.pattern())?;
                self.history.push(self.editor.save());
                self.editor.type_text(words);
            }
            "undo" => match self.history.pop() {
                Some(snapshot) => self.editor.restore(snapshot),
                None => self.notice = Some("Nothing to undo"),
            },
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        let mut editor = vec![
            format!("Content: {}", self.editor.content()),
            format!("Snapshots: {}", self.history.len()),
        ];
        editor.extend(self.notice.map(String::from));
        vec![Panel::new("Editor", editor)]
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// State

pub trait LightState {
    fn color(&self) -> &'static str;
    /// Consume the current state and return the one that follows it.
    fn next(self: Box<Self>) -> Box<dyn LightState>;
}

pub struct Red;
pub struct Green;
pub struct Yellow;

impl LightState for Red {
    fn color(&self) -> &'static str {
        "🔴 Red"
    }

    fn next(self: Box<Self>) -> Box<dyn LightState> {
        Box::new(Green)
    }
}

impl LightState for Green {
    fn color(&self) -> &'static str {
        "🟢 Green"
    }

    fn next(self: Box<Self>) -> Box<dyn LightState> {
        Box::new(Yellow)
    }
}

impl LightState for Yellow {
    fn color(&self) -> &'static str {
        "🟡 Yellow"
    }

    fn next(self: Box<Self>) -> Box<dyn LightState> {
        Box::new(Red)
    }
}

/// Context: delegates everything to whichever state it currently holds.
pub struct TrafficLight {
    state: Option<Box<dyn LightState>>,
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self {
            state: Some(Box::new(Red)),
        }
    }
}

impl TrafficLight {
    pub fn color(&self) -> &'static str {
        self.state.as_ref().map_or("", |state| state.color())
    }

    pub fn advance(&mut self) {
        if let Some(state) = self.state.take() {
            self.state = Some(state.next());
        }
    }
}

const STATE_ACTIONS: &[ActionSpec] =
    &[ActionSpec::bare("next", "Advance the traffic light")];

pub struct StateDemo {
    light: TrafficLight,
    transitions: DemoLog,
}

impl StateDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            light: TrafficLight::default(),
            transitions: config.log(),
        }
    }
}

impl Demo for StateDemo {
    fn pattern(&self) -> &'static str {
        "state"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        STATE_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "next" {
            return Err(action.unknown(self.pattern()));
        }
        let from = self.light.color();
        self.light.advance();
        self.transitions
            .push(format!("{from} → {}", self.light.color()));
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![
            Panel::single("Light", self.light.color()),
            Panel::new("Transitions", self.transitions.lines()),
        ]
    }

    fn reset(&mut self) {
        self.light = TrafficLight::default();
        self.transitions.clear();
    }
}

// ---------------------------------------------------------------------------
// Template Method

/// `process` fixes the order; implementors only fill in the steps.
pub trait DataProcessor {
    fn read_data(&self) -> String;
    fn transform_data(&self) -> String;
    fn save_data(&self) -> String;

    fn process(&self) -> Vec<String> {
        vec![self.read_data(), self.transform_data(), self.save_data()]
    }
}

pub struct CsvProcessor;
pub struct JsonProcessor;

impl DataProcessor for CsvProcessor {
    fn read_data(&self) -> String {
        "📥 Reading CSV data...".to_string()
    }

    fn transform_data(&self) -> String {
        "🔄 Converting CSV rows to objects...".to_string()
    }

    fn save_data(&self) -> String {
        "💾 Saving objects to DB...".to_string()
    }
}

impl DataProcessor for JsonProcessor {
    fn read_data(&self) -> String {
        "📥 Reading JSON file...".to_string()
    }

    fn transform_data(&self) -> String {
        "🔄 Parsing JSON to object...".to_string()
    }

    fn save_data(&self) -> String {
        "💾 Inserting object to DB...".to_string()
    }
}

const TEMPLATE_METHOD_ACTIONS: &[ActionSpec] = &[ActionSpec::with(
    "process",
    "<csv|json>",
    "Run the processing template for a data format",
)];

#[derive(Default)]
pub struct TemplateMethodDemo {
    steps: Vec<String>,
}

impl TemplateMethodDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for TemplateMethodDemo {
    fn pattern(&self) -> &'static str {
        "template-method"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        TEMPLATE_METHOD_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        if action.name != "process" {
            return Err(action.unknown(self.pattern()));
        }
        let processor: &dyn DataProcessor =
            match action.argument_in(self.pattern(), &["csv", "json"])? {
                "csv" => &CsvProcessor,
                _ => &JsonProcessor,
            };
        self.steps = processor.process();
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Steps", self.steps.clone())]
    }

    fn reset(&mut self) {
        self.steps.clear();
    }
}

// ---------------------------------------------------------------------------
// Visitor

pub struct CircleShape {
    pub radius: f64,
}

pub struct SquareShape {
    pub side: u32,
}

pub trait ShapeVisitor {
    type Output;
    fn visit_circle(&self, circle: &CircleShape) -> Self::Output;
    fn visit_square(&self, square: &SquareShape) -> Self::Output;
}

pub trait Visitable {
    fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Output;
}

impl Visitable for CircleShape {
    fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_circle(self)
    }
}

impl Visitable for SquareShape {
    fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_square(self)
    }
}

/// Area as a display line; new operations are new visitors, not new
/// methods on the shapes.
pub struct AreaCalculator;

impl ShapeVisitor for AreaCalculator {
    type Output = String;

    fn visit_circle(&self, circle: &CircleShape) -> String {
        let area = PI * circle.radius.powi(2);
        format!("🟠 Area of Circle: {area:.2}")
    }

    fn visit_square(&self, square: &SquareShape) -> String {
        format!("🟦 Area of Square: {}", square.side.pow(2))
    }
}

const VISITOR_ACTIONS: &[ActionSpec] = &[
    ActionSpec::bare("circle", "Visit a circle of radius 5"),
    ActionSpec::bare("square", "Visit a square of side 4"),
];

#[derive(Default)]
pub struct VisitorDemo {
    result: Option<String>,
}

impl VisitorDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Demo for VisitorDemo {
    fn pattern(&self) -> &'static str {
        "visitor"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        VISITOR_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        let line = match action.name.as_str() {
            "circle" => CircleShape { radius: 5.0 }.accept(&AreaCalculator),
            "square" => SquareShape { side: 4 }.accept(&AreaCalculator),
            _ => return Err(action.unknown(self.pattern())),
        };
        self.result = Some(line);
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        vec![Panel::new("Result", self.result.iter().cloned().collect())]
    }

    fn reset(&mut self) {
        self.result = None;
    }
}
