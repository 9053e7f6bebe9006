use std::io::Write;

use anyhow::{bail, Context, Result};
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};

use booking_form_cell::{
    BookingPage, FormField, HeadlessView, MessageBarState, PageEvent, PagePhase, SelectOption,
    SubmitOutcome,
};

struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(stdin()).lines(),
        }
    }

    async fn ask(&mut self, question: &str) -> Result<String> {
        print!("{}", question);
        std::io::stdout().flush().context("flushing prompt")?;

        match self.lines.next_line().await.context("reading stdin")? {
            Some(line) => Ok(line),
            None => bail!("input closed"),
        }
    }

    /// Pick one option by number; 0 is the placeholder.
    async fn choose(&mut self, title: &str, options: &[SelectOption]) -> Result<String> {
        println!("\n{}", title);
        for (index, option) in options.iter().enumerate() {
            println!("  {:>2}) {}", index, option.label);
        }

        loop {
            let answer = self.ask("> ").await?;
            match answer.trim().parse::<usize>() {
                Ok(index) if index < options.len() => return Ok(options[index].value.clone()),
                _ => println!("Elegí un número entre 0 y {}.", options.len().saturating_sub(1)),
            }
        }
    }

    async fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question).await?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y"))
    }
}

fn print_message(state: &MessageBarState) {
    if state.visible {
        let tag = state.kind.map(|k| k.css_class()).unwrap_or("info");
        println!("[{}] {}", tag, state.text);
    }
}

fn print_info(view: &HeadlessView) {
    let card = &view.info.card;
    println!(
        "\nPrecio: {}  ·  Duración: {}\n{} ({}) {} / {}",
        view.info.price, view.info.duration, card.name, card.specialty, card.price, card.duration
    );
}

/// Walk the user through the booking form until a payment link is obtained
/// or they give up.
pub async fn run(page: BookingPage<HeadlessView>) -> Result<()> {
    let mut prompt = Prompt::new();

    page.handle(PageEvent::Ready).await;
    if page.phase() == PagePhase::LoadFailed {
        print_message(&page.view().message);
        return Ok(());
    }

    loop {
        let specialties = page.view().specialty_options.clone();
        let specialty = prompt.choose("Especialidad (0 = todas):", &specialties).await?;
        page.view_mut().select_specialty(&specialty);
        page.handle(PageEvent::SpecialtyChanged).await;

        let doctors = page.view().doctor_options.clone();
        let doctor = prompt.choose("Médico:", &doctors).await?;
        page.view_mut().select_doctor(&doctor);
        page.handle(PageEvent::DoctorChanged).await;
        print_info(&page.view());

        for (field, question) in [
            (FormField::Name, "Nombre: "),
            (FormField::Email, "Email: "),
            (FormField::Date, "Fecha (AAAA-MM-DD): "),
            (FormField::Time, "Hora (HH:MM): "),
            (FormField::Reason, "Motivo: "),
        ] {
            let answer = prompt.ask(question).await?;
            page.view_mut().set_field(field, &answer);
        }

        match page.handle(PageEvent::FormSubmitted).await {
            Some(SubmitOutcome::Redirected(url)) => {
                println!("\nContinuá el pago en: {}", url);
                return Ok(());
            }
            Some(SubmitOutcome::Invalid) => {
                for error in &page.view().validation_errors {
                    println!("[error] {}", error);
                }
            }
            _ => print_message(&page.view().message),
        }

        if !prompt.confirm("¿Intentar de nuevo? [s/N] ").await? {
            return Ok(());
        }
    }
}
