use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellVisualState: u8 {
        const JUST_REVEALED = 0b0000_0001;
        const RUN_COMPLETE  = 0b0000_0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub value: Option<u32>,
    pub visual_state: CellVisualState,
}

#[derive(Debug, Clone)]
pub struct GridViewModel {
    side: usize,
    cells: Vec<GridCell>,
}

impl GridViewModel {
    #[must_use]
    pub fn new(side: usize, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self { side, cells }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> &GridCell {
        &self.cells[index]
    }
}

const CELL_SIZE: f32 = 50.0;
const CELL_PADDING: f32 = 4.0;
const CELL_SLOT: f32 = CELL_SIZE + CELL_PADDING * 2.0;

/// Paints the revealed cells of the grid.
///
/// Unrevealed cells are omitted entirely rather than drawn as blank
/// placeholders, so the grid visually grows one cell at a time. A zero
/// side renders nothing.
pub fn show(ui: &mut Ui, vm: &GridViewModel) {
    if vm.side == 0 {
        return;
    }

    #[expect(clippy::cast_precision_loss)]
    let span = vm.side as f32 * CELL_SLOT;
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(span), Sense::hover());

    let visuals = ui.visuals().clone();
    let painter = ui.painter();

    for row in 0..vm.side {
        for column in 0..vm.side {
            let cell = vm.cells[row * vm.side + column];
            // Unrevealed cells do not appear at all.
            let Some(value) = cell.value else {
                continue;
            };

            #[expect(clippy::cast_precision_loss)]
            let offset = Vec2::new(column as f32, row as f32) * CELL_SLOT
                + Vec2::splat(CELL_PADDING);
            let cell_rect =
                Rect::from_min_size(rect.min + offset, Vec2::splat(CELL_SIZE));

            if cell.visual_state.contains(CellVisualState::RUN_COMPLETE) {
                painter.rect_filled(cell_rect, 2.0, visuals.faint_bg_color);
            }

            let stroke = if cell.visual_state.contains(CellVisualState::JUST_REVEALED) {
                Stroke::new(2.0, visuals.selection.stroke.color)
            } else {
                Stroke::new(1.0, Color32::GRAY)
            };
            painter.rect_stroke(cell_rect, 2.0, stroke, StrokeKind::Inside);

            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                value.to_string(),
                FontId::proportional(CELL_SIZE * 0.4),
                visuals.text_color(),
            );
        }
    }
}
