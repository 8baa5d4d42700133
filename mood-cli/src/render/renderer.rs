use super::theme::OneDark;
use mood_core::{Feedback, Mood, Notice, Rgb, Timeline, Toast, TodayPanel};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_heading(&self, title: &str) {
        self.print_md(&format!("# {title}"));
    }

    pub fn print_today(&self, panel: &TodayPanel) {
        self.print_heading("Today's mood");
        match panel {
            TodayPanel::Empty { message } => self.print_md(&format!("*{message}*")),
            TodayPanel::Recorded {
                glyph,
                mood,
                color,
                time,
            } => {
                println!("{glyph} {}", self.paint_mood(mood, *color));
                println!("   Recorded at {}", self.paint_time(time));
            }
        }
    }

    pub fn print_timeline(&self, timeline: &Timeline) {
        self.print_heading("Mood history");
        match timeline {
            Timeline::Empty { message } => self.print_md(&format!("*{message}*")),
            Timeline::Rows(rows) => {
                for row in rows {
                    let key = row.delete_key.to_string();
                    let key = if self.opts.use_color {
                        key.with(OneDark::COMMENT).to_string()
                    } else {
                        key
                    };
                    println!(
                        "{} {} {} at {}  [{}]",
                        row.glyph,
                        self.paint_mood(&format!("{:<12}", row.mood), row.color),
                        row.date_label,
                        self.paint_time(&row.time),
                        key
                    );
                }
            }
        }
    }

    pub fn print_toast(&self, toast: &Toast) {
        let message = toast.message();
        if self.opts.use_color {
            println!("{} {}", toast.glyph, message.with(OneDark::GREEN));
        } else {
            println!("{} {}", toast.glyph, message);
        }
    }

    pub fn print_notice(&self, notice: &Notice) {
        if self.opts.use_color {
            eprintln!("{}", notice.message.with(OneDark::RED));
        } else {
            eprintln!("{}", notice.message);
        }
    }

    pub fn print_feedback(&self, feedback: &Feedback) {
        match feedback {
            Feedback::Recorded(toast) => self.print_toast(toast),
            Feedback::Deleted => self.print_info("Mood entry deleted."),
            Feedback::NotFound => self.print_info("No mood entry with that key."),
            Feedback::Cancelled => self.print_info("Nothing was deleted."),
            Feedback::Failed(notice) => self.print_notice(notice),
        }
    }

    pub fn print_palette(&self) {
        self.print_heading("Moods");
        for mood in Mood::all() {
            let style = mood.style();
            println!(
                "{} {} {}",
                style.glyph,
                self.paint_mood(&format!("{:<12}", mood.id()), style.color),
                style.color
            );
        }
    }

    fn paint_mood(&self, mood: &str, color: Rgb) -> String {
        if self.opts.use_color {
            mood.with(OneDark::accent(color)).bold().to_string()
        } else {
            mood.to_string()
        }
    }

    fn paint_time(&self, time: &str) -> String {
        if self.opts.use_color {
            time.with(OneDark::BLUE).to_string()
        } else {
            time.to_string()
        }
    }
}
