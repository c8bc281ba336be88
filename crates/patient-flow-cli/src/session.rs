//! Console session: prompts, input parsing and dispatch to the facility.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use patient_flow_core::FacilityCoordinator;

use crate::menu::MenuChoice;

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over any line-oriented input and output.
pub struct Session<R, W> {
    facility: FacilityCoordinator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(facility: FacilityCoordinator, input: R, output: W) -> Self {
        Self {
            facility,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Hospital Appointment & Triage System (CLI) ---")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line("Enter choice: ")? else {
                writeln!(self.output)?;
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.output.flush()
    }

    #[cfg(test)]
    pub fn facility(&self) -> &FacilityCoordinator {
        &self.facility
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        tracing::debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::RegisterPatient => self.register(),
            MenuChoice::BookAppointment => self.book(),
            MenuChoice::ServeNext => {
                let outcome = self.facility.serve_next_patient();
                writeln!(self.output, "{}", outcome)?;
                Ok(Flow::Continue)
            }
            MenuChoice::EmergencyIn => self.emergency(),
            MenuChoice::Undo => {
                let outcome = self.facility.undo_last_action();
                writeln!(self.output, "{}", outcome)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Report => {
                let report = self.facility.generate_report();
                writeln!(self.output, "{}", report)?;
                Ok(Flow::Continue)
            }
            MenuChoice::CancelSlot => self.cancel_slot(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting System.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn register(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_line("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.read_number::<u32>("Age: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(severity) = self.read_number::<u32>("Default Severity (1-10): ")? else {
            return Ok(Flow::Exit);
        };

        match self.facility.register_patient(name, age, severity) {
            Ok(patient_id) => writeln!(self.output, "Registered Patient ID: {}", patient_id)?,
            Err(e) => writeln!(self.output, "Registration failed: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn book(&mut self) -> io::Result<Flow> {
        let Some(patient_id) = self.read_number("Patient ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(doctor_id) = self.read_number("Doctor ID: ")? else {
            return Ok(Flow::Exit);
        };

        match self.facility.book_appointment(patient_id, doctor_id) {
            Ok(booking) => writeln!(self.output, "{}", booking)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn emergency(&mut self) -> io::Result<Flow> {
        let Some(patient_id) = self.read_number("Patient ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(doctor_id) = self.read_number("Doctor ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(severity) =
            self.read_number("Severity Score (1-10, lower is higher priority): ")?
        else {
            return Ok(Flow::Exit);
        };

        match self.facility.emergency_in(patient_id, doctor_id, severity) {
            Ok(admission) => writeln!(self.output, "{}", admission)?,
            Err(e) => writeln!(self.output, "{} Please register first.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn cancel_slot(&mut self) -> io::Result<Flow> {
        let Some(doctor_id) = self.read_number("Doctor ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(slot_id) = self.read_number("Slot ID: ")? else {
            return Ok(Flow::Exit);
        };

        match self.facility.cancel_slot(doctor_id, slot_id) {
            Ok(slot) => writeln!(
                self.output,
                "Cancelled Slot {} for Doctor {} (was {})",
                slot.id, doctor_id, slot.status
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Prompt until the line parses as a number. `None` on end of input.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}
