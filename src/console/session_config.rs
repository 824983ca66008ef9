/// Options for one console session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Print the "Pawns-Only Chess" title line first.
    pub show_banner: bool,
    /// Print the game record after the session ends.
    pub print_record: bool,
    /// Pawn FEN to start from instead of the standard layout. A start where
    /// the side to move is already blocked ends at once as a stalemate.
    pub start_position: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            print_record: false,
            start_position: None,
        }
    }
}
