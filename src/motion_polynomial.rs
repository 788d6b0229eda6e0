/// One constant-jerk phase of a profile: the state at the start of the phase
/// and the jerk applied during it.
///
/// `time` is the phase start measured from the beginning of the profile.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MotionPolynomial {
    pub time: f64,
    pub pos: f64,
    pub vel: f64,
    pub acc: f64,
    pub jrk: f64,
}

impl MotionPolynomial {
    /// Creates a new MotionPolynomial.
    pub fn new(time: f64, pos: f64, vel: f64, acc: f64, jrk: f64) -> Self {
        Self {
            time,
            pos,
            vel,
            acc,
            jrk,
        }
    }

    /// State reached after `dt` seconds inside this phase.
    ///
    /// The returned polynomial starts at `time + dt` and keeps the jerk.
    pub fn advance(&self, dt: f64) -> Self {
        // acc(t) = a0 + j0*t
        let acc = self.acc + self.jrk * dt;

        // vel(t) = v0 + a0*t + j0*t^2/2
        let vel = self.vel + dt * (self.acc + dt * self.jrk / 2.0);

        // pos(t) = s0 + v0*t + a0*t^2/2 + j0*t^3/6
        let pos = self.pos + dt * (self.vel + dt * (self.acc / 2.0 + dt * self.jrk / 6.0));

        Self::new(self.time + dt, pos, vel, acc, self.jrk)
    }
}
