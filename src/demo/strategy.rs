//! Strategy demo: a sorter with a swappable algorithm next to one that
//! switches on an algorithm name.

use crate::demo::creational::owned;
use crate::demo::{Action, ActionSpec, Demo, DemoConfig, DemoError, DemoLog, Panel, timestamp};

pub const TEST_DATA: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];

pub trait SortStrategy {
    fn sort(&self, data: &[i32]) -> Vec<i32>;
    fn name(&self) -> &'static str;
    fn complexity(&self) -> &'static str;
}

pub struct BubbleSort;
pub struct QuickSort;
pub struct MergeSort;

impl SortStrategy for BubbleSort {
    fn sort(&self, data: &[i32]) -> Vec<i32> {
        bubble_sort(data)
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn complexity(&self) -> &'static str {
        "O(n²)"
    }
}

impl SortStrategy for QuickSort {
    fn sort(&self, data: &[i32]) -> Vec<i32> {
        quick_sort(data)
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn complexity(&self) -> &'static str {
        "O(n log n)"
    }
}

impl SortStrategy for MergeSort {
    fn sort(&self, data: &[i32]) -> Vec<i32> {
        merge_sort(data)
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn complexity(&self) -> &'static str {
        "O(n log n)"
    }
}

fn bubble_sort(data: &[i32]) -> Vec<i32> {
    let mut sorted = data.to_vec();
    let len = sorted.len();
    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }
    sorted
}

/// First element as pivot; equal keys go right.
fn quick_sort(data: &[i32]) -> Vec<i32> {
    let Some((&pivot, rest)) = data.split_first() else {
        return Vec::new();
    };
    let (left, right): (Vec<i32>, Vec<i32>) = rest.iter().partition(|&&x| x < pivot);
    let mut sorted = quick_sort(&left);
    sorted.push(pivot);
    sorted.extend(quick_sort(&right));
    sorted
}

fn merge_sort(data: &[i32]) -> Vec<i32> {
    if data.len() <= 1 {
        return data.to_vec();
    }
    let (left, right) = data.split_at(data.len() / 2);
    let (left, right) = (merge_sort(left), merge_sort(right));

    let mut merged = Vec::with_capacity(data.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

fn join(data: &[i32]) -> String {
    data.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Context: sorts with whatever strategy it currently holds.
pub struct StrategySorter {
    strategy: Box<dyn SortStrategy>,
    sorts: usize,
    log: DemoLog,
}

impl StrategySorter {
    pub fn new(strategy: Box<dyn SortStrategy>, log: DemoLog) -> Self {
        Self {
            strategy,
            sorts: 0,
            log,
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.log.push(format!(
            "🔄 [{}] Strategy changed to {}",
            timestamp(),
            strategy.name()
        ));
        self.strategy = strategy;
    }

    pub fn sort(&mut self, data: &[i32]) -> Vec<i32> {
        self.sorts += 1;
        let sorted = self.strategy.sort(data);
        self.log.push(format!(
            "✅ [{}] Sorted [{}] → [{}] using {} ({})",
            timestamp(),
            join(data),
            join(&sorted),
            self.strategy.name(),
            self.strategy.complexity()
        ));
        sorted
    }

    pub fn sort_count(&self) -> usize {
        self.sorts
    }

    pub fn log(&self) -> &DemoLog {
        &self.log
    }
}

/// Algorithm chosen by name in a match; every new algorithm means editing
/// this and every copy of it.
pub struct HardcodedSorter {
    sorts: usize,
    log: DemoLog,
}

impl HardcodedSorter {
    pub fn new(log: DemoLog) -> Self {
        Self { sorts: 0, log }
    }

    /// `None` for an algorithm the match does not know; the attempt is still
    /// counted and logged.
    pub fn sort(&mut self, data: &[i32], algorithm: &str) -> Option<Vec<i32>> {
        self.sorts += 1;
        let stamp = timestamp();
        let (sorted, complexity) = match algorithm {
            "bubble" => (bubble_sort(data), "O(n²)"),
            "quick" => (quick_sort(data), "O(n log n)"),
            "merge" => (merge_sort(data), "O(n log n)"),
            _ => {
                tracing::debug!(algorithm, "hardcoded sorter rejected algorithm");
                self.log
                    .push(format!("❌ [{stamp}] Unknown algorithm: {algorithm}"));
                return None;
            }
        };
        self.log.push(format!(
            "✅ [{stamp}] Hardcoded sort [{}] → [{}] using {algorithm} ({complexity}) - switch statement logic!",
            join(data),
            join(&sorted)
        ));
        Some(sorted)
    }

    pub fn sort_count(&self) -> usize {
        self.sorts
    }

    pub fn log(&self) -> &DemoLog {
        &self.log
    }
}

const STRATEGY_MAINTENANCE: &[&str] = &[
    "🔍 Request: Add Heap Sort algorithm",
    "📝 Step 1: Create HeapSort class implementing SortStrategy interface",
    "💡 Step 2: Implement sort(), getName(), and getComplexity() methods",
    "✅ DONE! HeapSort can now be used anywhere strategies are accepted",
    "🧪 Zero changes needed to existing Sorter class or client code",
    "🔌 Plug-and-play: Just pass new HeapSort() to setStrategy()",
];

const HARDCODED_MAINTENANCE: &[&str] = &[
    "🔍 Request: Add Heap Sort algorithm",
    "📝 Step 1: Implement heapSort() method in HardcodedSorter class",
    "❌ Step 2: Add 'heap' case to the main switch statement",
    "❌ Step 3: Update all UI dropdowns to include 'Heap Sort' option",
    "❌ Step 4: Update all algorithm documentation/comments",
    "❌ Step 5: Find and update DataProcessor.sort() switch statement",
    "❌ Step 6: Find and update ReportGenerator.sort() switch statement",
    "❌ Step 7: Find and update ExportService.sort() switch statement",
    "❌ Step 8: Update all 15 other places that have hardcoded algorithm logic",
    "❌ Step 9: Update unit tests for each modified class",
    "❌ Step 10: Update integration tests that rely on algorithm lists",
    "⚠️  Step 11: Search codebase for any missed hardcoded references",
    "💥 RISK: Easy to miss a switch statement and break existing functionality",
];

const STRATEGY_ACTIONS: &[ActionSpec] = &[
    ActionSpec::with("strategy", "<bubble|quick|merge>", "Switch strategy and sort the test data"),
    ActionSpec::with("hardcoded", "<name>", "Sort the test data with the switch-based sorter"),
    ActionSpec::bare("maintenance", "Compare the work needed to add Heap Sort"),
];

pub struct StrategyDemo {
    config: DemoConfig,
    sorter: StrategySorter,
    hardcoded: HardcodedSorter,
    show_maintenance: bool,
}

impl StrategyDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            config: *config,
            sorter: StrategySorter::new(Box::new(BubbleSort), config.log()),
            hardcoded: HardcodedSorter::new(config.log()),
            show_maintenance: false,
        }
    }
}

impl Demo for StrategyDemo {
    fn pattern(&self) -> &'static str {
        "strategy"
    }

    fn actions(&self) -> &'static [ActionSpec] {
        STRATEGY_ACTIONS
    }

    fn perform(&mut self, action: &Action) -> Result<(), DemoError> {
        match action.name.as_str() {
            "strategy" => {
                let strategy: Box<dyn SortStrategy> =
                    match action.argument_in(self.pattern(), &["bubble", "quick", "merge"])? {
                        "quick" => Box::new(QuickSort),
                        "merge" => Box::new(MergeSort),
                        _ => Box::new(BubbleSort),
                    };
                self.sorter.set_strategy(strategy);
                self.sorter.sort(&TEST_DATA);
            }
            "hardcoded" => {
                let algorithm = action.required_argument(self.pattern())?;
                self.hardcoded.sort(&TEST_DATA, algorithm);
            }
            "maintenance" => self.show_maintenance = true,
            _ => return Err(action.unknown(self.pattern())),
        }
        Ok(())
    }

    fn view(&self) -> Vec<Panel> {
        let mut strategy = vec![format!("Sorts: {}", self.sorter.sort_count())];
        strategy.extend(self.sorter.log().lines());
        let mut hardcoded = vec![format!("Sorts: {}", self.hardcoded.sort_count())];
        hardcoded.extend(self.hardcoded.log().lines());

        let mut panels = vec![
            Panel::single("Test data", format!("[{}]", join(&TEST_DATA))),
            Panel::new("Strategy Pattern", strategy),
            Panel::new("Hardcoded Logic", hardcoded),
        ];
        if self.show_maintenance {
            panels.push(Panel::new("Maintenance: Strategy", owned(STRATEGY_MAINTENANCE)));
            panels.push(Panel::new("Maintenance: Hardcoded", owned(HARDCODED_MAINTENANCE)));
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

    const SORTED: [i32; 7] = [11, 12, 22, 25, 34, 64, 90];

    fn lines(session: &DemoSession, title: &str) -> Vec<String> {
        session
            .view()
            .into_iter()
            .find(|panel| panel.title == title)
            .map(|panel| panel.lines)
            .unwrap_or_else(|| panic!("no panel {title}"))
    }

    #[test]
    fn every_strategy_sorts_the_same() {
        let strategies: [Box<dyn SortStrategy>; 3] =
            [Box::new(BubbleSort), Box::new(QuickSort), Box::new(MergeSort)];
        for strategy in &strategies {
            assert_eq!(strategy.sort(&TEST_DATA), SORTED, "{}", strategy.name());
            assert!(strategy.sort(&[]).is_empty());
            assert_eq!(strategy.sort(&[3, 1, 3, 2]), [1, 2, 3, 3]);
        }
    }

    #[test]
    fn strategy_log_records_change_then_sort() {
        let mut demo = DemoSession::start("strategy", &DemoConfig::default()).unwrap();
        demo.run(["strategy:quick"]).unwrap();
        let panel = lines(&demo, "Strategy Pattern");
        assert_eq!(panel[0], "Sorts: 1");
        assert!(panel[1].ends_with("Strategy changed to Quick Sort"));
        assert!(panel[2].ends_with(
            "Sorted [64,34,25,12,22,11,90] → [11,12,22,25,34,64,90] using Quick Sort (O(n log n))"
        ));
    }

    #[test]
    fn hardcoded_sorter_logs_unknown_algorithms() {
        let mut sorter = HardcodedSorter::new(DemoLog::default());
        assert_eq!(sorter.sort(&TEST_DATA, "merge").as_deref(), Some(&SORTED[..]));
        assert_eq!(sorter.sort(&TEST_DATA, "heap"), None);
        assert_eq!(sorter.sort_count(), 2);
        assert!(sorter.log().last().unwrap().ends_with("Unknown algorithm: heap"));

        let mut demo = DemoSession::start("strategy", &DemoConfig::default()).unwrap();
        demo.run(["hardcoded:bubble"]).unwrap();
        assert!(lines(&demo, "Hardcoded Logic")[1].ends_with(
            "using bubble (O(n²)) - switch statement logic!"
        ));
    }

    #[test]
    fn strategy_name_outside_the_family_is_rejected() {
        let mut demo = DemoSession::start("strategy", &DemoConfig::default()).unwrap();
        assert!(matches!(
            demo.run(["strategy:heap"]),
            Err(DemoError::InvalidArgument { .. })
        ));
        demo.run(["maintenance"]).unwrap();
        assert_eq!(lines(&demo, "Maintenance: Hardcoded").len(), 13);
    }
}
