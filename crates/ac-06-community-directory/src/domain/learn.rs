//! Learning-hub modules.
//!
//! A module either lists its lessons or only states how many it has. Lessons
//! are taken in order: each one unlocks once the one before it is complete,
//! and a completed module unlocks all of them for review.

use serde::{Deserialize, Serialize};
use shared_types::{DomainError, DomainResult, ModuleId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearnCategory {
    Circles,
    Investing,
    Trading,
    Savings,
    Bonds,
    Stocks,
    Crypto,
    RealEstate,
    Budgeting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonKind {
    Video,
    Article,
    Quiz,
    Interactive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnLesson {
    pub id: String,
    pub title: String,
    /// Display length ("6 min").
    pub duration: String,
    pub kind: LessonKind,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearnModule {
    pub id: ModuleId,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub duration: String,
    pub completed: bool,
    /// Advertised lesson count, used when `lessons_list` is empty.
    pub lessons: u32,
    pub category: LearnCategory,
    pub difficulty: Difficulty,
    pub author: String,
    pub author_avatar: String,
    /// Average review score out of 5.
    pub rating: f64,
    pub enrolled_count: u32,
    #[serde(default)]
    pub lessons_list: Vec<LearnLesson>,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
}

/// Lesson completion within one module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub completed_lessons: u32,
    pub total_lessons: u32,
}

impl ModuleProgress {
    /// Completion as a whole percentage; zero for a module without lessons.
    pub fn percent(&self) -> u8 {
        if self.total_lessons == 0 {
            return 0;
        }
        let completed = self.completed_lessons.min(self.total_lessons) as u64;
        (completed * 100 / self.total_lessons as u64) as u8
    }

    pub fn is_started(&self) -> bool {
        self.completed_lessons > 0
    }
}

impl LearnModule {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::precondition(format!("module {} has no title", self.id)));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(DomainError::precondition(format!(
                "rating {} for module {} is outside [0, 5]",
                self.rating, self.id
            )));
        }
        if self.lessons_list.len() > self.lessons as usize {
            return Err(DomainError::precondition(format!(
                "module {} lists {} lessons but advertises {}",
                self.id,
                self.lessons_list.len(),
                self.lessons
            )));
        }
        Ok(())
    }

    pub fn progress(&self) -> ModuleProgress {
        let completed_lessons = self.lessons_list.iter().filter(|l| l.completed).count() as u32;
        let total_lessons = if self.lessons_list.is_empty() {
            self.lessons
        } else {
            self.lessons_list.len() as u32
        };
        ModuleProgress {
            completed_lessons,
            total_lessons,
        }
    }

    /// `true` when lesson `index` cannot be opened yet. Out-of-range indexes
    /// are locked.
    pub fn is_lesson_locked(&self, index: usize) -> bool {
        let Some(lesson) = self.lessons_list.get(index) else {
            return true;
        };
        if self.completed || lesson.completed || index == 0 {
            return false;
        }
        !self.lessons_list[index - 1].completed
    }

    /// First lesson not yet completed.
    pub fn next_lesson(&self) -> Option<&LearnLesson> {
        self.lessons_list.iter().find(|l| !l.completed)
    }

    /// Case-insensitive match over title and summary.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        !query.is_empty()
            && (self.title.to_lowercase().contains(&query)
                || self.summary.to_lowercase().contains(&query))
    }
}
