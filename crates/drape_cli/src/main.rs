//! Drape CLI
//!
//! Headless driver for the sheet controller:
//! - `drape simulate` presents a sheet, replays a drag and prints where it settles
//! - `drape config` prints the default `drape.toml`

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use drape_animation::{AnimationScheduler, Channel, Completion};
use drape_core::{PanTracker, Point, PresentationDirection, Rect};
use drape_sheet::{
    AnimationId, AnimationRequest, PresentationStyle, SheetConfig, SheetContent, SheetContext, SheetController,
    SheetHost, SheetLayout, TransitionSpec, ViewHandle,
};

/// Channel carrying the sheet container frame
const CONTAINER: Channel = 0;

/// Host ticks per second
const FRAME_RATE: f64 = 60.0;

/// Drape - gesture-driven sheet simulator
#[derive(Parser, Debug)]
#[command(name = "drape")]
#[command(about = "Headless simulator for gesture-driven modal sheets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Present a sheet, drag it and report where it comes to rest
    Simulate(SimulateArgs),

    /// Print the default configuration as TOML
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct SimulateArgs {
    /// Configuration file (drape.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Container width
    #[arg(long, default_value_t = 390.0)]
    width: f32,

    /// Container height
    #[arg(long, default_value_t = 844.0)]
    height: f32,

    /// Collapsed height the content asks for
    #[arg(long)]
    collapsed: Option<f32>,

    /// Expanded height the content asks for
    #[arg(long)]
    expanded: Option<f32>,

    /// Override the configured presentation style
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Override the configured presentation direction
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// Horizontal drag distance
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dx: f32,

    /// Vertical drag distance (negative drags upward)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dy: f32,

    /// How long the drag takes, in milliseconds
    #[arg(long, default_value_t = 200.0)]
    drag_ms: f64,

    /// Print every animated frame
    #[arg(long)]
    frames: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Sheet,
    PopUp,
}

impl From<StyleArg> for PresentationStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Sheet => PresentationStyle::Sheet,
            StyleArg::PopUp => PresentationStyle::PopUp,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl From<DirectionArg> for PresentationDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::TopToBottom => PresentationDirection::TopToBottom,
            DirectionArg::BottomToTop => PresentationDirection::BottomToTop,
            DirectionArg::LeftToRight => PresentationDirection::LeftToRight,
            DirectionArg::RightToLeft => PresentationDirection::RightToLeft,
        }
    }
}

// ============================================================================
// Headless host
// ============================================================================

/// Host that runs animations on a frame scheduler instead of a toolkit
struct HeadlessHost {
    scheduler: AnimationScheduler<AnimationId>,
    /// Animations replaced before they finished, not yet reported
    interrupted: Vec<Completion<AnimationId>>,
    layout: SheetLayout,
    dismissed: bool,
    print_frames: bool,
}

impl HeadlessHost {
    fn new(print_frames: bool) -> Self {
        Self {
            scheduler: AnimationScheduler::new(),
            interrupted: Vec::new(),
            layout: SheetLayout::default(),
            dismissed: false,
            print_frames,
        }
    }
}

impl SheetHost for HeadlessHost {
    fn apply_layout(&mut self, layout: &SheetLayout) {
        self.layout = *layout;
    }

    fn run_animation(&mut self, request: AnimationRequest) {
        tracing::debug!(
            "{:?}: {} -> {} over {:.3}s",
            request.purpose,
            describe(request.animation.from),
            describe(request.animation.to),
            request.animation.duration
        );
        let (_, interrupted) = self.scheduler.start(CONTAINER, request.animation, request.id);
        self.interrupted.extend(interrupted);
        self.layout = request.layout;
    }

    fn dismiss(&mut self, transition: &TransitionSpec) {
        tracing::info!("dismissing over {:.3}s", transition.duration());
        self.dismissed = true;
    }

    fn set_pan_enabled(&mut self, enabled: bool) {
        tracing::debug!("pan recognizer {}", if enabled { "attached" } else { "detached" });
    }
}

/// Content with fixed preferred heights
struct FixedContent {
    collapsed: Option<f32>,
    expanded: Option<f32>,
}

impl SheetContent for FixedContent {
    fn view(&self) -> Option<ViewHandle> {
        Some(ViewHandle(1))
    }

    fn collapsed_height(&self, _sheet: &SheetContext) -> Option<f32> {
        self.collapsed
    }

    fn expanded_height(&self, _sheet: &SheetContext) -> Option<f32> {
        self.expanded
    }
}

type Sheet = SheetController<HeadlessHost>;

fn describe(frame: Rect) -> String {
    format!(
        "({:.1}, {:.1}, {:.1} x {:.1})",
        frame.x(),
        frame.y(),
        frame.width(),
        frame.height()
    )
}

/// Report interrupted animations, then tick until the scheduler is idle
fn run_animations(sheet: &mut Sheet) {
    let dt = 1.0 / FRAME_RATE;
    loop {
        let interrupted: Vec<_> = sheet.host_mut().interrupted.drain(..).collect();
        for completion in interrupted {
            sheet.animation_finished(completion.tag, completion.finished);
        }
        if !sheet.host().scheduler.has_active_animations() {
            break;
        }

        let output = sheet.host_mut().scheduler.tick(dt);
        if sheet.host().print_frames {
            for update in &output.frames {
                println!("  frame {}", describe(update.frame));
            }
        }
        for completion in output.completed {
            sheet.animation_finished(completion.tag, completion.finished);
        }
    }
}

/// Replay a straight drag from the content origin in 1/60s steps
fn drag(sheet: &mut Sheet, dx: f32, dy: f32, drag_ms: f64) {
    if !sheet.gesture_should_begin() {
        tracing::warn!("drag refused in state {}", sheet.state());
        return;
    }

    let start = sheet.content_frame().origin;
    let steps = ((drag_ms / 1000.0) * FRAME_RATE).ceil().max(1.0) as usize;
    let step_ms = drag_ms / steps as f64;

    let mut tracker = PanTracker::new();
    tracker.begin(start, 0.0);
    sheet.handle_pan(&mut tracker);

    let mut position = start;
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        position = Point::new(start.x + dx * t, start.y + dy * t);
        tracker.move_to(position, step_ms * step as f64);
        sheet.handle_pan(&mut tracker);
    }

    tracker.end(position, drag_ms);
    sheet.handle_pan(&mut tracker);
}

fn load_config(args: &SimulateArgs) -> Result<SheetConfig> {
    let mut config = match &args.config {
        Some(path) => SheetConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))?,
        None => SheetConfig::default(),
    };
    if let Some(style) = args.style {
        config.style = style.into();
    }
    if let Some(direction) = args.direction {
        config.direction = direction.into();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn simulate(args: SimulateArgs) -> Result<()> {
    if !(args.width > 0.0 && args.height > 0.0) {
        bail!("container size must be positive, got {} x {}", args.width, args.height);
    }
    let config = load_config(&args)?;
    let bounds = Rect::new(0.0, 0.0, args.width, args.height);
    let content = FixedContent {
        collapsed: args.collapsed,
        expanded: args.expanded,
    };

    let mut sheet = SheetController::with_config(content, HeadlessHost::new(args.frames), config);

    sheet.view_will_appear(bounds);
    run_animations(&mut sheet);
    sheet.view_did_appear();

    let heights = sheet.heights();
    println!(
        "presented {:?} sheet: collapsed {:.1}, expanded {:.1}",
        sheet.animator().kind(),
        heights.collapsed,
        heights.expanded
    );
    println!("  {} at {}", sheet.state(), describe(sheet.content_frame()));

    if args.dx != 0.0 || args.dy != 0.0 {
        println!("drag ({:.1}, {:.1}) over {:.0}ms", args.dx, args.dy, args.drag_ms);
        drag(&mut sheet, args.dx, args.dy, args.drag_ms);
        run_animations(&mut sheet);
    }

    if sheet.host().dismissed {
        sheet.view_will_disappear();
        run_animations(&mut sheet);
        sheet.view_did_disappear();
        println!("  dismissed");
    } else {
        println!("  {} at {}", sheet.state(), describe(sheet.content_frame()));
    }
    Ok(())
}

fn print_config(output: Option<PathBuf>) -> Result<()> {
    let toml = SheetConfig::default()
        .to_toml()
        .context("Failed to serialize default configuration")?;
    match output {
        Some(path) => {
            fs::write(&path, toml).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{toml}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate(args) => simulate(args),
        Commands::Config { output } => print_config(output),
    }
}
