use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::scroll_animation::use_scroll_animation;
use crate::motion::binding::{AnimationOptions, Archetype};

const VISIBLE_LINES: usize = 6;
const PRELOADED_LINES: usize = 4;
const AFTER_COMMAND_MS: u32 = 800;
const OUTPUT_LINE_MS: u32 = 400;
const PAUSE_MS: u32 = 4_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Warn,
    Success,
    Info,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Muted => "term-muted",
            Tone::Warn => "term-warn",
            Tone::Success => "term-success",
            Tone::Info => "term-info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Command(&'static str),
    Output(&'static str, Tone),
    /// Idle prompt between commands.
    Pause,
}

pub const SCRIPT: [Line; 23] = [
    Line::Command("npm install vera-ai-sdk --save"),
    Line::Output("npm WARN deprecated request@2.88.2", Tone::Warn),
    Line::Output("fetchMetadata: sill resolveWithNewModule...", Tone::Muted),
    Line::Output("✔ Downloaded 47 packages in 2.3s", Tone::Success),
    Line::Pause,
    Line::Command("axobits build --app=charioteer"),
    Line::Output("Compiling TypeScript modules...", Tone::Muted),
    Line::Output("Bundling assets with Vite...", Tone::Muted),
    Line::Output("✔ Build complete: dist/charioteer (2.4 MB)", Tone::Success),
    Line::Pause,
    Line::Command("vera-ai train --model=sentiment-analysis"),
    Line::Output("Loading training dataset (12,847 samples)...", Tone::Muted),
    Line::Output("Epoch 1/5: loss=0.432, accuracy=0.89", Tone::Info),
    Line::Output("✔ Model trained and saved to models/sentiment-v2", Tone::Success),
    Line::Pause,
    Line::Command("charioteer deploy --env=production"),
    Line::Output("Provisioning K8s cluster...", Tone::Muted),
    Line::Output("Applying service mesh configuration...", Tone::Muted),
    Line::Output("✔ Fleet management system live", Tone::Success),
    Line::Pause,
    Line::Command("npm run test:e2e"),
    Line::Output("Running end-to-end test suite...", Tone::Muted),
    Line::Output("✔ 127 tests passed | 0 failed | 0 skipped", Tone::Success),
];

/// Typing demo driven one step at a time: `delay()` says how long to wait,
/// `advance()` performs the step.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalScript {
    script: &'static [Line],
    shown: Vec<Line>,
    cursor: usize,
    /// Characters of the current command typed so far.
    typed: usize,
}

impl TerminalScript {
    pub fn new(script: &'static [Line]) -> Self {
        let preloaded = PRELOADED_LINES.min(script.len());
        Self {
            script,
            shown: script[..preloaded].to_vec(),
            cursor: preloaded,
            typed: 0,
        }
    }

    pub fn current(&self) -> Option<Line> {
        if self.script.is_empty() {
            return None;
        }
        Some(self.script[self.cursor % self.script.len()])
    }

    pub fn shown(&self) -> &[Line] {
        &self.shown
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn typed(&self) -> usize {
        self.typed
    }

    /// The part of the current command typed so far.
    pub fn partial(&self) -> String {
        match self.current() {
            Some(Line::Command(text)) => text.chars().take(self.typed).collect(),
            _ => String::new(),
        }
    }

    /// Milliseconds until the next step. Keystrokes take 50-80 ms with a
    /// deterministic jitter.
    pub fn delay(&self) -> u32 {
        match self.current() {
            None => PAUSE_MS,
            Some(Line::Pause) => PAUSE_MS,
            Some(Line::Command(text)) if self.typed < text.chars().count() => {
                let jitter = (self.typed * 17 + self.cursor * 7) % 31;
                50 + jitter as u32
            }
            Some(Line::Command(_)) => AFTER_COMMAND_MS,
            Some(Line::Output(..)) => OUTPUT_LINE_MS,
        }
    }

    pub fn advance(&mut self) {
        let Some(line) = self.current() else {
            return;
        };
        match line {
            Line::Pause => self.cursor += 1,
            Line::Command(text) if self.typed < text.chars().count() => self.typed += 1,
            Line::Command(_) | Line::Output(..) => {
                self.push(line);
                self.typed = 0;
                self.cursor += 1;
            }
        }
    }

    fn push(&mut self, line: Line) {
        self.shown.push(line);
        if self.shown.len() > VISIBLE_LINES {
            let excess = self.shown.len() - VISIBLE_LINES;
            self.shown.drain(..excess);
        }
    }
}

impl Reducible for TerminalScript {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.advance();
        Rc::new(next)
    }
}

fn render_line(line: &Line) -> Html {
    match line {
        Line::Command(text) => html! {
            <div class="term-line">
                <span class="term-prompt">{"➜"}</span>
                <span class="term-plain">{*text}</span>
            </div>
        },
        Line::Output(text, tone) => html! {
            <div class="term-line"><span class={tone.class()}>{*text}</span></div>
        },
        Line::Pause => html! {},
    }
}

#[function_component(TerminalSection)]
pub fn terminal_section() -> Html {
    let copy = use_node_ref();
    let window = use_node_ref();
    let terminal = use_reducer(|| TerminalScript::new(&SCRIPT));

    use_scroll_animation(
        copy.clone(),
        AnimationOptions::new(Archetype::Stagger { amount: 0.15 }),
    );
    use_scroll_animation(
        window.clone(),
        AnimationOptions::new(Archetype::FadeLeft).delay(0.2),
    );

    {
        let dispatcher = terminal.dispatcher();
        let delay = terminal.delay();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(delay, move || dispatcher.dispatch(()));
                move || drop(timer)
            },
            (terminal.cursor(), terminal.typed()),
        );
    }

    let prompt = match terminal.current() {
        Some(Line::Command(_)) => html! {
            <div class="term-line">
                <span class="term-prompt">{"➜"}</span>
                <span class="term-plain">{terminal.partial()}<span class="term-caret">{"_"}</span></span>
            </div>
        },
        Some(Line::Pause) => html! {
            <div class="term-line">
                <span class="term-prompt">{"➜"}</span>
                <span class="term-caret">{"_"}</span>
            </div>
        },
        _ => html! { <div class="term-line term-caret term-hidden">{"_"}</div> },
    };

    html! {
        <section class="terminal" id="about">
            <div class="container terminal__grid">
                <div ref={copy}>
                    <h2 class="section-title">
                        {"Serious software, built with "}
                        <span class="brand-gradient">{"discipline"}</span>
                        {"."}
                    </h2>
                    <div class="terminal__point">
                        <span class="terminal__num">{"1"}</span>
                        <div>
                            <h4>{"Build with operational clarity"}</h4>
                            <p>{"Observability, predictable rollouts, and maintainable systems from day one."}</p>
                        </div>
                    </div>
                    <div class="terminal__point">
                        <span class="terminal__num">{"2"}</span>
                        <div>
                            <h4>{"Use AI responsibly"}</h4>
                            <p>{"Automation and insights that stay auditable, secure, and under your control."}</p>
                        </div>
                    </div>
                </div>

                <div class="terminal__window" ref={window}>
                    <div class="terminal__chrome">
                        <span class="terminal__dot terminal__dot--red"></span>
                        <span class="terminal__dot terminal__dot--yellow"></span>
                        <span class="terminal__dot terminal__dot--green"></span>
                        <span class="terminal__title">{"terminal: zsh"}</span>
                    </div>
                    <div class="terminal__body">
                        { for terminal.shown().iter().map(render_line) }
                        { prompt }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .terminal {
                    position: relative;
                    padding: 8rem 0;
                    background: #000000;
                    overflow: hidden;
                }
                .terminal__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .terminal__point {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .terminal__point h4 {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                }
                .terminal__point p {
                    margin: 0;
                    color: var(--muted);
                    line-height: 1.6;
                }
                .terminal__num {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(99, 91, 255, 0.1);
                    color: var(--brand-soft);
                    font-weight: 700;
                }
                .terminal__window {
                    height: 340px;
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #0a0a0a;
                    border: 1px solid var(--line);
                }
                .terminal__chrome {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding-bottom: 1rem;
                    margin-bottom: 2rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .terminal__dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                }
                .terminal__dot--red { background: rgba(239, 68, 68, 0.5); }
                .terminal__dot--yellow { background: rgba(234, 179, 8, 0.5); }
                .terminal__dot--green { background: rgba(34, 197, 94, 0.5); }
                .terminal__title {
                    margin-left: auto;
                    color: #4b5563;
                    font-family: monospace;
                    font-size: 0.75rem;
                }
                .terminal__body {
                    flex: 1;
                    overflow: hidden;
                    font-family: "JetBrains Mono", monospace;
                    font-size: 0.875rem;
                }
                .term-line {
                    margin-bottom: 0.75rem;
                }
                .term-prompt { color: var(--brand); margin-right: 0.5rem; }
                .term-plain { color: #ffffff; }
                .term-muted { color: #6b7280; }
                .term-warn { color: #eab308; }
                .term-success { color: #4ade80; }
                .term-info { color: #22d3ee; }
                .term-caret { animation: caret 1s steps(2) infinite; }
                .term-hidden { color: transparent; }
                @keyframes caret {
                    from { opacity: 1; }
                    to { opacity: 0; }
                }
                @media (max-width: 1024px) {
                    .terminal__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_until_cursor(terminal: &mut TerminalScript, cursor: usize) -> u32 {
        let mut elapsed = 0;
        while terminal.cursor() < cursor {
            elapsed += terminal.delay();
            terminal.advance();
        }
        elapsed
    }

    #[test]
    fn test_starts_with_preloaded_lines() {
        let terminal = TerminalScript::new(&SCRIPT);
        assert_eq!(terminal.shown(), &SCRIPT[..4]);
        assert_eq!(terminal.current(), Some(Line::Pause));
        assert_eq!(terminal.delay(), 4_500);
    }

    #[test]
    fn test_types_command_then_waits() {
        let mut terminal = TerminalScript::new(&SCRIPT);
        terminal.advance();
        assert_eq!(terminal.current(), Some(Line::Command("axobits build --app=charioteer")));

        for expected in 1..=3 {
            let delay = terminal.delay();
            assert!((50..=80).contains(&delay), "keystroke delay {delay}");
            terminal.advance();
            assert_eq!(terminal.typed(), expected);
        }
        assert_eq!(terminal.partial(), "axo");

        while terminal.typed() < "axobits build --app=charioteer".len() {
            terminal.advance();
        }
        assert_eq!(terminal.delay(), 800);
        terminal.advance();
        assert_eq!(terminal.typed(), 0);
        assert_eq!(
            terminal.shown().last(),
            Some(&Line::Command("axobits build --app=charioteer"))
        );
        assert_eq!(terminal.delay(), 400);
    }

    #[test]
    fn test_keeps_last_six_lines() {
        let mut terminal = TerminalScript::new(&SCRIPT);
        run_until_cursor(&mut terminal, 9);
        assert_eq!(terminal.shown().len(), 6);
        assert_eq!(
            terminal.shown().last(),
            Some(&Line::Output("✔ Build complete: dist/charioteer (2.4 MB)", Tone::Success))
        );
    }

    #[test]
    fn test_loops_over_script() {
        let mut terminal = TerminalScript::new(&SCRIPT);
        let elapsed = run_until_cursor(&mut terminal, SCRIPT.len() + 1);
        assert_eq!(terminal.current(), Some(SCRIPT[1]));
        assert!(elapsed > 4 * 4_500);
        assert!(terminal.shown().len() <= 6);
    }
}
