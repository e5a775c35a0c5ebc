/// Chore categories. The code is what gets stored and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Cooking,
    Dishes,
    Laundry,
    Cleaning,
    Shopping,
    Trash,
    BathCleaning,
    ToiletCleaning,
    WaterAreaCleaning,
    /// Stored text that names no known category (older free-text labels).
    /// Kept verbatim so it survives listing, export and deletion.
    Other(String),
}

impl Task {
    pub const ALL: [Task; 9] = [
        Task::Cooking,
        Task::Dishes,
        Task::Laundry,
        Task::Cleaning,
        Task::Shopping,
        Task::Trash,
        Task::BathCleaning,
        Task::ToiletCleaning,
        Task::WaterAreaCleaning,
    ];

    pub fn code(&self) -> &str {
        match self {
            Task::Cooking => "cooking",
            Task::Dishes => "dishes",
            Task::Laundry => "laundry",
            Task::Cleaning => "cleaning",
            Task::Shopping => "shopping",
            Task::Trash => "trash",
            Task::BathCleaning => "bath-cleaning",
            Task::ToiletCleaning => "toilet-cleaning",
            Task::WaterAreaCleaning => "water-area-cleaning",
            Task::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Task::Cooking => "料理",
            Task::Dishes => "皿洗い",
            Task::Laundry => "洗濯",
            Task::Cleaning => "掃除",
            Task::Shopping => "買い物",
            Task::Trash => "ゴミ出し",
            Task::BathCleaning => "風呂掃除",
            Task::ToiletCleaning => "トイレ掃除",
            Task::WaterAreaCleaning => "水回り",
            Task::Other(raw) => raw,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Task::Cooking => "🍳",
            Task::Dishes => "🫗",
            Task::Laundry => "👕",
            Task::Cleaning => "🧹",
            Task::Shopping => "🛒",
            Task::Trash => "🚮",
            Task::BathCleaning => "🛁",
            Task::ToiletCleaning => "🚽",
            Task::WaterAreaCleaning => "💧",
            Task::Other(_) => "",
        }
    }

    /// Emoji + label, e.g. "🍳料理" (the form older databases stored).
    pub fn display(&self) -> String {
        format!("{}{}", self.emoji(), self.label())
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → known category.
    /// Accepts the code, the bare label and the emoji label; whitespace
    /// inside the text is ignored ("🍳 料理" is cooking).
    pub fn from_db_str(s: &str) -> Option<Self> {
        let s: String = s.split_whitespace().collect();
        Task::ALL
            .into_iter()
            .find(|t| s == t.code() || s == t.label() || s == t.display())
    }

    /// Decode a stored value without failing: unknown text becomes `Other`.
    pub fn from_db_lossless(s: &str) -> Self {
        Task::from_db_str(s).unwrap_or_else(|| Task::Other(s.trim().to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Task::Other(_))
    }

    /// Helper: parse user input (case-insensitive codes, `_` accepted for `-`)
    pub fn from_input(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Task::from_db_str(&normalized).or_else(|| Task::from_db_str(s))
    }
}
