//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the banner palette.
struct Colors {
    die: &'static str,
    pips: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    die: "\x1b[38;2;120;170;120m",
    pips: "\x1b[38;2;255;255;255m",
    title: "\x1b[1;38;2;120;200;140m",
    subtitle: "\x1b[38;2;100;100;120m",
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    die: "",
    pips: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the Stakelord banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let d = c.die;
    let p = c.pips;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{d}  ┌─────┐{r}          {tt}   _____ _        _        _                _{r}
{d}  │{p} ● ● {d}│{r}          {tt}  / ____| |      | |      | |              | |{r}
{d}  │{p}  ●  {d}│{r}{d} ┌─────┐{r}  {tt} | (___ | |_ __ _| | _____| | ___  _ __ __| |{r}
{d}  │{p} ● ● {d}│{r}{d} │{p} ●   {d}│{r}  {tt}  \___ \| __/ _` | |/ / _ \ |/ _ \| '__/ _` |{r}
{d}  └─────┘{r}{d} │{p}   ● {d}│{r}  {tt}  ____) | || (_| |   <  __/ | (_) | | | (_| |{r}
{d}          └─────┘{r}  {tt} |_____/ \__\__,_|_|\_\___|_|\___/|_|  \__,_|{r}

                    {st}"Bet the edge, not the feeling."{r}
"#
    );
}
