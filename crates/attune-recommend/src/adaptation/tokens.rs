use attune_core::models::Category;

/// Visual and timing tokens of one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary_color: &'static str,
    pub accent_color: &'static str,
    pub gradient: &'static str,
    pub border_radius: &'static str,
    pub box_shadow: &'static str,
    pub animation_ms: u32,
    pub transition_ms: u32,
    pub hover_ms: u32,
}

pub fn palette(category: Category) -> Palette {
    match category {
        Category::ActionOriented => Palette {
            primary_color: "#FF6B35",
            accent_color: "#FF8E53",
            gradient: "linear-gradient(45deg, #FF6B35, #FF8E53)",
            border_radius: "8px",
            box_shadow: "0 4px 20px rgba(255, 107, 53, 0.3)",
            animation_ms: 300,
            transition_ms: 200,
            hover_ms: 150,
        },
        Category::Fluid => Palette {
            primary_color: "#4A90E2",
            accent_color: "#5BA3F5",
            gradient: "linear-gradient(135deg, #4A90E2, #5BA3F5)",
            border_radius: "16px",
            box_shadow: "0 8px 32px rgba(74, 144, 226, 0.2)",
            animation_ms: 500,
            transition_ms: 350,
            hover_ms: 200,
        },
        Category::Grounded => Palette {
            primary_color: "#8B4513",
            accent_color: "#A0522D",
            gradient: "linear-gradient(180deg, #8B4513, #A0522D)",
            border_radius: "4px",
            box_shadow: "0 2px 16px rgba(139, 69, 19, 0.25)",
            animation_ms: 700,
            transition_ms: 450,
            hover_ms: 250,
        },
        Category::Communicative => Palette {
            primary_color: "#E6F3FF",
            accent_color: "#CCE7FF",
            gradient: "linear-gradient(90deg, #E6F3FF, #CCE7FF)",
            border_radius: "24px",
            box_shadow: "0 6px 24px rgba(230, 243, 255, 0.4)",
            animation_ms: 400,
            transition_ms: 300,
            hover_ms: 180,
        },
        Category::Transcendent => Palette {
            primary_color: "#9B59B6",
            accent_color: "#AF7AC5",
            gradient: "linear-gradient(45deg, #9B59B6, #AF7AC5)",
            border_radius: "50%",
            box_shadow: "0 10px 40px rgba(155, 89, 182, 0.3)",
            animation_ms: 600,
            transition_ms: 400,
            hover_ms: 220,
        },
    }
}
