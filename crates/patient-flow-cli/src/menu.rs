//! Menu choices.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterPatient,
    BookAppointment,
    ServeNext,
    EmergencyIn,
    Undo,
    Report,
    CancelSlot,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::RegisterPatient,
        MenuChoice::BookAppointment,
        MenuChoice::ServeNext,
        MenuChoice::EmergencyIn,
        MenuChoice::Undo,
        MenuChoice::Report,
        MenuChoice::CancelSlot,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0) + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::RegisterPatient => "Register Patient",
            MenuChoice::BookAppointment => "Book Routine Appointment",
            MenuChoice::ServeNext => "Serve Next Patient",
            MenuChoice::EmergencyIn => "Emergency In",
            MenuChoice::Undo => "Undo Last Action",
            MenuChoice::Report => "Reports",
            MenuChoice::CancelSlot => "Cancel Slot",
            MenuChoice::Exit => "Exit",
        }
    }
}
