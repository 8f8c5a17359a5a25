use glam::Vec2;
use zap_physics::geometry::{self, Circle};
use zap_physics::{
    Arena, Body, BodyId, CollisionEvent, Contact, Edge, Kinematic, Shape, World, WorldConfig,
};

// ==================================================================================
// A tiny pong: paddles stop at the top/bottom, the ball bounces off walls and
// paddles and is "missed" when it leaves through the left or right edge.
// ==================================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Paddle,
    Ball,
}

#[derive(Debug)]
struct Actor {
    kind: Kind,
    body: Body,
    missed: Vec<Edge>,
}

impl Actor {
    fn paddle(x: f32, y: f32) -> Self {
        Self {
            kind: Kind::Paddle,
            body: Body::new(Vec2::new(x, y)).with_shape(Shape::rectangle(10.0, 100.0)),
            missed: Vec::new(),
        }
    }

    fn ball(x: f32, y: f32, vel: Vec2) -> Self {
        Self {
            kind: Kind::Ball,
            body: Body::new(Vec2::new(x, y))
                .with_velocity(vel)
                .with_shape(Shape::circle(5.0)),
            missed: Vec::new(),
        }
    }
}

impl Kinematic for Actor {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn collide(&mut self, contact: Contact<'_, Self>) {
        match (self.kind, contact) {
            (Kind::Paddle, Contact::Edge(Edge::Top | Edge::Bottom)) => {
                self.body.vel.y = 0.0;
                self.body.revert_position();
            }
            (Kind::Paddle, _) => {}
            (Kind::Ball, Contact::Edge(Edge::Top | Edge::Bottom)) => {
                self.body.vel.y = -self.body.vel.y;
                self.body.revert_position();
            }
            (Kind::Ball, Contact::Edge(edge)) => self.missed.push(edge),
            (Kind::Ball, Contact::Body { other, .. }) => {
                assert_eq!(other.kind, Kind::Paddle);
                self.body.vel.x = -self.body.vel.x;
                self.body.revert_position();
            }
        }
    }
}

fn pong_world() -> World<Actor> {
    let mut world = World::new();
    world.set_gravity(0.0);
    world.set_arena(Arena::new(800.0, 600.0));
    world
}

#[test]
fn ball_bounces_off_paddle() {
    let mut world = pong_world();
    let paddle = world.insert(Actor::paddle(700.0, 250.0));
    let ball = world.insert(Actor::ball(680.0, 290.0, Vec2::new(250.0, 0.0)));

    world.update(16.0);
    world.update(16.0);
    assert_eq!(world.get(ball).unwrap().body.vel.x, 250.0);

    world.update(16.0);
    let b = world.get(ball).unwrap();
    assert_eq!(b.body.vel.x, -250.0);
    assert_eq!(b.body.pos, Vec2::new(688.0, 290.0));
    assert_eq!(
        world.collisions(),
        &[CollisionEvent::Pair { body: ball, other: paddle }]
    );

    world.update(16.0);
    assert_eq!(world.get(ball).unwrap().body.pos.x, 684.0);
}

#[test]
fn ball_bounces_off_bottom_wall() {
    let mut world = pong_world();
    let ball = world.insert(Actor::ball(400.0, 588.0, Vec2::new(0.0, 250.0)));

    world.update(16.0);

    let b = world.get(ball).unwrap();
    assert_eq!(b.body.vel, Vec2::new(0.0, -250.0));
    assert_eq!(b.body.pos, Vec2::new(400.0, 588.0));
}

#[test]
fn paddle_stops_at_top() {
    let mut world = pong_world();
    let paddle = world.insert(Actor::paddle(10.0, 2.0));
    world.get_mut(paddle).unwrap().body.vel.y = -200.0;

    world.update(16.0);

    let p = world.get(paddle).unwrap();
    assert_eq!(p.body.vel.y, 0.0);
    assert_eq!(p.body.pos, Vec2::new(10.0, 2.0));
}

#[test]
fn missed_ball_is_reported_once_per_tick() {
    let mut world = pong_world();
    let ball = world.insert(Actor::ball(1.0, 300.0, Vec2::new(-250.0, 0.0)));

    world.update(16.0);

    assert_eq!(world.get(ball).unwrap().missed, vec![Edge::Left]);
    assert_eq!(world.collisions().len(), 1);
}

#[test]
fn rally_keeps_ball_inside_vertical_bounds() {
    let mut world = pong_world();
    world.insert(Actor::paddle(10.0, 250.0));
    world.insert(Actor::paddle(780.0, 250.0));
    let ball = world.insert(Actor::ball(400.0, 300.0, Vec2::new(250.0, 180.0)));

    for _ in 0..600 {
        world.update(16.0);
        let b = world.get(ball).unwrap();
        if !b.missed.is_empty() {
            break;
        }
        assert!(b.body.pos.y >= 0.0 && b.body.pos.y + 10.0 < 600.0, "y={}", b.body.pos.y);
    }
}

// ==================================================================================
// Gravity and configuration
// ==================================================================================

#[test]
fn gravity_from_json_config() {
    let config = WorldConfig::from_json(r#"{ "gravity": 100.0, "collide_with_window": false }"#)
        .unwrap();
    let mut world: World = World::with_config(&config);
    let id = world.insert(Body::new(Vec2::ZERO).with_mass(2.0));

    world.update(500.0);
    let body = world.get(id).unwrap();
    assert_eq!(body.pos, Vec2::ZERO);
    assert_eq!(body.vel, Vec2::new(0.0, 50.0));

    world.update(500.0);
    let body = world.get(id).unwrap();
    assert_eq!(body.pos, Vec2::new(0.0, 25.0));
    assert_eq!(body.vel, Vec2::new(0.0, 100.0));
}

#[test]
fn falling_body_lands_on_floor_edge() {
    let mut world: World<Actor> = World::new();
    let mut ball = Actor::ball(100.0, 0.0, Vec2::ZERO);
    ball.body.set_mass(1.0);
    let id = world.insert(ball);

    let mut bounced = false;
    for _ in 0..200 {
        world.update(16.0);
        if world.get(id).unwrap().body.vel.y < 0.0 {
            bounced = true;
            break;
        }
    }
    assert!(bounced, "ball should reach the bottom edge and bounce");
}

#[test]
fn floor_bounce_sees_velocity_before_gravity() {
    let mut world: World<Actor> = World::new();
    let mut ball = Actor::ball(400.0, 588.0, Vec2::new(0.0, 250.0));
    ball.body.set_mass(1.0);
    let id = world.insert(ball);

    // 250 px/s for 10 ms reaches the floor; gravity adds 200 * 10 / 1000 afterwards.
    world.update(10.0);

    let b = world.get(id).unwrap();
    assert_eq!(world.collisions(), &[CollisionEvent::Edge { body: id, edge: Edge::Bottom }]);
    assert_eq!(b.body.pos, Vec2::new(400.0, 588.0));
    assert_eq!(b.body.vel, Vec2::new(0.0, -248.0));
}

#[test]
fn removed_body_keeps_its_state() {
    let mut world: World = World::new();
    let id = world.insert(Body::new(Vec2::new(5.0, 5.0)).with_velocity(Vec2::new(10.0, 0.0)));
    world.update(1000.0);

    let body = world.remove(id).unwrap();
    assert_eq!(body.pos, Vec2::new(15.0, 5.0));
    assert_eq!(body.world(), None);
    assert!(world.get(id).is_none());
    assert_ne!(world.insert(body), id);
}

#[test]
fn unknown_id_is_harmless() {
    let mut world: World = World::new();
    assert!(world.check_for_collision(BodyId(99)).is_none());
    assert!(world.get_mut(BodyId(99)).is_none());
}

// ==================================================================================
// Geometry reference cases
// ==================================================================================

#[test]
fn line_circle_reference_cases() {
    let c = Circle::new(Vec2::new(20.0, 20.0), 10.0);
    assert!(!geometry::line_circle_intersect(&c, Vec2::new(30.0, 0.0), Vec2::new(30.0, 30.0)));
    assert!(geometry::line_circle_intersect(&c, Vec2::new(15.0, 0.0), Vec2::new(15.0, 30.0)));
}

#[test]
fn shaped_bodies_overlap_both_ways() {
    let rect = Body::new(Vec2::new(20.0, 20.0)).with_shape(Shape::rectangle(10.0, 10.0));
    let circle = Body::new(Vec2::new(15.0, 15.0)).with_shape(Shape::circle(10.0));
    let far = Body::new(Vec2::new(100.0, 100.0)).with_shape(Shape::circle(10.0));

    assert!(rect.overlaps(&circle) && circle.overlaps(&rect));
    assert!(!rect.overlaps(&far) && !far.overlaps(&rect));
    assert!(!circle.overlaps(&far) && !far.overlaps(&circle));
}
