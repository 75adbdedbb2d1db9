use crate::labels::Task;
use crate::splits::Split;

/// Options controlling one catalog load call.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Partition to extract from the source.
    pub split: Split,
    /// Whether repeated judgements per document collapse into list-valued records.
    pub group: bool,
    /// Whether synthetic-neutral rows are dropped for sources that flag them.
    pub remove_synthetic_neutral: bool,
    /// Task granularity for sources whose label vocabulary is task-conditioned.
    pub task: Option<Task>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            split: Split::Test,
            group: true,
            remove_synthetic_neutral: true,
            task: None,
        }
    }
}

impl LoadOptions {
    /// Override the requested split.
    pub fn with_split(mut self, split: Split) -> Self {
        self.split = split;
        self
    }

    /// Enable or disable grouping into list-valued records.
    pub fn with_group(mut self, group: bool) -> Self {
        self.group = group;
        self
    }

    /// Enable or disable synthetic-neutral filtering.
    pub fn with_remove_synthetic_neutral(mut self, remove: bool) -> Self {
        self.remove_synthetic_neutral = remove;
        self
    }

    /// Set the task granularity for task-conditioned sources.
    pub fn with_task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }
}
