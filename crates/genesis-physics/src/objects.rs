//! Static collidable geometry.
//!
//! Objects are axis-aligned boxes of infinite mass resting on the floor.
//! `y` is the top edge of the box, so an object spans
//! `[x, x + width] x [y, y + height]`.

use genesis_types::ObjectKind;

use crate::body::Body;

/// A static object in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    /// What the object is.
    pub kind: ObjectKind,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Nominal mass; objects never move.
    pub mass: f64,
}

impl WorldObject {
    /// An object of the given size standing on the floor at `floor_y`.
    pub fn on_floor(kind: ObjectKind, x: f64, width: f64, height: f64, mass: f64, floor_y: f64) -> Self {
        Self {
            kind,
            x,
            y: floor_y - height,
            width,
            height,
            mass,
        }
    }

    /// Footprint area, used as apparent size.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the body's bounding square overlaps this box.
    pub fn overlaps(&self, body: &Body) -> bool {
        let r = body.radius;
        let p = body.position;
        p.x + r > self.x
            && p.x - r < self.x + self.width
            && p.y + r > self.y
            && p.y - r < self.y + self.height
    }

    /// Push the body out along the axis of least overlap.
    ///
    /// Side hits reflect horizontal velocity with `restitution`. Landing on
    /// the top grounds the body and cancels downward velocity; hitting the
    /// underside reflects vertical velocity.
    pub fn resolve(&self, body: &mut Body, restitution: f64) {
        let r = body.radius;
        let p = body.position;
        let overlap_left = (p.x + r) - self.x;
        let overlap_right = (self.x + self.width) - (p.x - r);
        let overlap_top = (p.y + r) - self.y;
        let overlap_bottom = (self.y + self.height) - (p.y - r);

        let min_x = overlap_left.min(overlap_right);
        let min_y = overlap_top.min(overlap_bottom);

        if min_x < min_y {
            body.position.x = if overlap_left < overlap_right {
                self.x - r
            } else {
                self.x + self.width + r
            };
            body.velocity.x = -body.velocity.x * restitution;
        } else if overlap_top < overlap_bottom {
            body.position.y = self.y - r;
            body.on_ground = true;
            if body.velocity.y > 0.0 {
                body.velocity.y = 0.0;
            }
        } else {
            body.position.y = self.y + self.height + r;
            body.velocity.y = -body.velocity.y * restitution;
        }
    }
}

/// The default scenery: a tree left of the spawn point and a rock to its
/// right.
pub fn default_objects(floor_y: f64) -> Vec<WorldObject> {
    vec![
        WorldObject::on_floor(ObjectKind::Rock, 600.0, 80.0, 50.0, 1000.0, floor_y),
        WorldObject::on_floor(ObjectKind::Tree, 200.0, 30.0, 150.0, 500.0, floor_y),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use genesis_types::Vec2;

    use super::*;

    fn body_at(x: f64, y: f64) -> Body {
        Body::new(Vec2::new(x, y), 20.0, 70.0).unwrap()
    }

    fn rock() -> WorldObject {
        WorldObject::on_floor(ObjectKind::Rock, 600.0, 80.0, 50.0, 1000.0, 450.0)
    }

    #[test]
    fn floor_objects_have_top_edge_above_floor() {
        let rock = rock();
        assert!((rock.y - 400.0).abs() < f64::EPSILON);
        assert!((rock.area() - 4000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distant_body_does_not_overlap() {
        assert!(!rock().overlaps(&body_at(400.0, 430.0)));
    }

    #[test]
    fn side_hit_pushes_body_back_and_reflects() {
        let rock = rock();
        let mut body = body_at(585.0, 430.0);
        body.velocity.x = 100.0;
        assert!(rock.overlaps(&body));
        rock.resolve(&mut body, 0.3);
        assert!((body.position.x - 580.0).abs() < 1e-9);
        assert!((body.velocity.x + 30.0).abs() < 1e-9);
    }

    #[test]
    fn landing_on_top_grounds_the_body() {
        let rock = rock();
        let mut body = body_at(640.0, 385.0);
        body.velocity.y = 80.0;
        assert!(rock.overlaps(&body));
        rock.resolve(&mut body, 0.3);
        assert!((body.position.y - 380.0).abs() < 1e-9);
        assert!(body.on_ground);
        assert!(body.velocity.y.abs() < f64::EPSILON);
    }

    #[test]
    fn hitting_the_underside_pushes_down_and_reflects() {
        let ledge = WorldObject {
            kind: ObjectKind::Rock,
            x: 600.0,
            y: 200.0,
            width: 80.0,
            height: 50.0,
            mass: 1000.0,
        };
        let mut body = body_at(640.0, 265.0);
        body.velocity.y = -100.0;
        assert!(ledge.overlaps(&body));
        ledge.resolve(&mut body, 0.3);
        assert!((body.position.y - 270.0).abs() < 1e-9);
        assert!((body.velocity.y - 30.0).abs() < 1e-9);
        assert!((body.position.x - 640.0).abs() < f64::EPSILON);
        assert!(!body.on_ground);
    }
}
