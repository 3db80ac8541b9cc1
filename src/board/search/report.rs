/// Summary of one finished root search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub value: Option<i32>,
    pub nodes: u64,
    pub cutoffs: u64,
    pub best: Option<String>,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} value {} nodes {} cutoffs {} best {}",
            info.depth,
            info.value.map_or_else(|| "none".to_string(), |v| v.to_string()),
            info.nodes,
            info.cutoffs,
            info.best.as_deref().unwrap_or("none")
        );
    }
}
